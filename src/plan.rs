use std::path::PathBuf;

use crate::config::Options;

/// All output paths for one component, derived once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    pub component_dir: PathBuf,
    pub component_file: PathBuf,
    pub index_file: PathBuf,
    pub stylesheet_file: PathBuf,
}

/// Pure path derivation: same name and options always yield the same plan.
/// The name is used verbatim; no validation happens here.
pub fn file_plan(name: &str, options: &Options) -> FilePlan {
    let component_dir = options.target_dir.join(name);
    FilePlan {
        component_file: component_dir.join(format!(
            "{name}.{}",
            options.language.component_ext()
        )),
        index_file: component_dir.join(format!("index.{}", options.language.index_ext())),
        stylesheet_file: component_dir.join(format!("{name}.module.scss")),
        component_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;

    fn options(language: Language) -> Options {
        Options {
            language,
            target_dir: PathBuf::from("src/components"),
            scss_module: true,
        }
    }

    #[test]
    fn plans_js_paths() {
        let plan = file_plan("Button", &options(Language::Js));
        assert_eq!(plan.component_dir, PathBuf::from("src/components/Button"));
        assert_eq!(
            plan.component_file,
            PathBuf::from("src/components/Button/Button.js")
        );
        assert_eq!(
            plan.index_file,
            PathBuf::from("src/components/Button/index.js")
        );
        assert_eq!(
            plan.stylesheet_file,
            PathBuf::from("src/components/Button/Button.module.scss")
        );
    }

    #[test]
    fn plans_ts_paths() {
        let plan = file_plan("Card", &options(Language::Ts));
        assert_eq!(
            plan.component_file,
            PathBuf::from("src/components/Card/Card.tsx")
        );
        assert_eq!(
            plan.index_file,
            PathBuf::from("src/components/Card/index.ts")
        );
    }

    #[test]
    fn plan_is_deterministic() {
        let opts = options(Language::Ts);
        assert_eq!(file_plan("Nav", &opts), file_plan("Nav", &opts));
    }
}
