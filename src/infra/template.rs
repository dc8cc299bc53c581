//! Browser-test source rendering.
//!
//! The generated test is the fixed Gecko browser-test template with three
//! substitutions. Downstream consumers expect that shape verbatim, so the
//! template text and the indentation of the expected-result body must be
//! reproduced byte for byte. Substituted values are not escaped; embedded
//! quotes in the hostname or JSON body pass through as-is.

use anyhow::Result;
use minijinja::{Environment, context};

use crate::domain::Hostname;

/// Gecko browser-test template. The leading newline is part of the output.
pub const BROWSER_TEST_TEMPLATE: &str = r#"
/* global add_heuristic_tests */

"use strict";

add_heuristic_tests(
  [
    {
      fixturePath: {{ file_name }},
      expectedResult:
{{ expected }}
    },
  ],
  {{ file_path }}
);
"#;

/// Indentation applied to every line of the expected-result body.
const EXPECTED_INDENT: &str = "      ";

/// Prefixes every line of `body` with the expected-result indentation.
///
/// Line terminators are preserved as-is; no trailing newline is added or
/// removed. An empty body stays empty.
pub fn reindent(body: &str) -> String {
    body.split_inclusive('\n')
        .map(|line| format!("{EXPECTED_INDENT}{line}"))
        .collect()
}

/// Renders the browser-test source for a hostname and its expected result.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render(hostname: &Hostname, expected: &str) -> Result<String> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("browser_test", BROWSER_TEST_TEMPLATE)?;

    let template = env.get_template("browser_test")?;
    let rendered = template.render(context! {
        file_name => format!("\"{hostname}.html\""),
        expected => reindent(expected),
        file_path => format!("\"fixtures/third_party/{hostname}/\""),
    })?;

    Ok(rendered)
}
