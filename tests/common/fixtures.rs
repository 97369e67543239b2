//! Test fixtures and fake engines.
//!
//! The fake engines are `sh` scripts that append their arguments to
//! `calls.log` in the tools directory, then do the smallest amount of work
//! the real tool would.

use super::env::TestEnv;

pub const SOURCE_CSS: &str = "@tailwind base;\n@tailwind utilities;\n";

pub const APP_TEMPLATE: &str = "<main class=\"p-4 text-red-500\"></main>\n";

pub const PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "version": "0.0.0",
  "scripts": {
    "ng": "ng",
    "start": "ng serve",
    "build": "ng build",
    "test": "ng test"
  }
}
"#;

/// Copies `-i` to `-o` with a banner
pub const FAKE_TAILWIND: &str = r#"#!/bin/sh
echo "tailwindcss $*" >> "$(dirname "$0")/calls.log"
while [ $# -gt 0 ]; do
  case "$1" in
    -i) in="$2"; shift 2 ;;
    -o) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
{ echo "/* built */"; cat "$in"; } > "$out"
"#;

/// Like `FAKE_TAILWIND`, but leaves a partial output for two seconds first
pub const SLOW_TAILWIND: &str = r#"#!/bin/sh
echo "tailwindcss $*" >> "$(dirname "$0")/calls.log"
while [ $# -gt 0 ]; do
  case "$1" in
    -i) in="$2"; shift 2 ;;
    -o) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
echo "partial" > "$out"
sleep 2
{ echo "/* built */"; cat "$in"; } > "$out"
"#;

pub const FAILING_TAILWIND: &str = r#"#!/bin/sh
echo "tailwindcss $*" >> "$(dirname "$0")/calls.log"
echo "CssSyntaxError: Unclosed block" >&2
exit 1
"#;

/// `sass <src> <dest> --no-source-map`
pub const FAKE_SASS: &str = r#"#!/bin/sh
echo "sass $*" >> "$(dirname "$0")/calls.log"
{ echo "/* sass */"; cat "$1"; } > "$2"
"#;

/// Prints a fixed purge result as JSON. Like the real CLI, the
/// `rejected` list is only present with `--rejected`
pub const FAKE_PURGECSS: &str = r#"#!/bin/sh
echo "purgecss $*" >> "$(dirname "$0")/calls.log"
case " $* " in
  *" --rejected "*) printf '[{"css":".p-4{padding:1rem}","rejected":[".unused-a",".unused-b"]}]' ;;
  *) printf '[{"css":".p-4{padding:1rem}"}]' ;;
esac
"#;

impl TestEnv {
    /// A project with a source stylesheet and one template
    pub fn with_project() -> Self {
        let env = TestEnv::new();
        env.write_project_file("src/tailwind.css", SOURCE_CSS);
        env.write_project_file("src/app/app.component.html", APP_TEMPLATE);
        env
    }

    /// Install a fake engine script and point `env_key` at it
    #[cfg(unix)]
    pub fn install_tool(&mut self, name: &str, script: &str, env_key: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tool_path(name);
        super::env::write_file(&path, script);
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        self.set_env(env_key, path.display().to_string());
    }

    /// Working tailwindcss, sass and purgecss fakes
    #[cfg(unix)]
    pub fn with_fake_engines(mut self) -> Self {
        self.install_tool("tailwindcss", FAKE_TAILWIND, "NGTW_TAILWIND_CMD");
        self.install_tool("sass", FAKE_SASS, "NGTW_SASS_CMD");
        self.install_tool("purgecss", FAKE_PURGECSS, "NGTW_PURGECSS_CMD");
        self
    }
}
