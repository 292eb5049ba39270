use crate::config::Language;
use crate::format::Formatter;

/// Placeholder replaced verbatim with the component name.
pub const TOKEN: &str = "COMPONENT_NAME";

/// Component template for the js variant.
pub const COMPONENT_JS: &str = r"import React from 'react';
import styles from './COMPONENT_NAME.module.scss';

const COMPONENT_NAME = () => {
  return (
    <div className={styles.COMPONENT_NAME}>
      COMPONENT_NAME
    </div>
  );
};

export default COMPONENT_NAME;
";

/// Component template for the ts variant.
pub const COMPONENT_TS: &str = r"import React from 'react';
import styles from './COMPONENT_NAME.module.scss';

type COMPONENT_NAMEProps = {};

const COMPONENT_NAME = ({}: COMPONENT_NAMEProps) => {
  return (
    <div className={styles.COMPONENT_NAME}>
      COMPONENT_NAME
    </div>
  );
};

export default COMPONENT_NAME;
";

/// Fixed two-line index re-export template, shared by both variants.
pub const INDEX: &str = r"export * from './COMPONENT_NAME';
export { default } from './COMPONENT_NAME';
";

/// Render the component source: substitute every occurrence of the token,
/// optionally drop the stylesheet import, then format.
///
/// The name is inserted without escaping, and the import is removed by a
/// single literal-string match; a template with a different quote style
/// would be left untouched.
pub fn render_component(
    language: Language,
    name: &str,
    scss_module: bool,
    formatter: &Formatter,
) -> String {
    let source = match language {
        Language::Js => COMPONENT_JS,
        Language::Ts => COMPONENT_TS,
    };
    let mut text = source.replace(TOKEN, name);
    if !scss_module {
        let import = format!("import styles from './{name}.module.scss';");
        text = text.replacen(&import, "", 1);
    }
    formatter.format(&text)
}

/// Render the index re-export file.
pub fn render_index(name: &str, formatter: &Formatter) -> String {
    formatter.format(&INDEX.replace(TOKEN, name))
}
