//! All setting definitions with their default values.

/// A single setting definition.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

pub const CUTS_FILE: &str = "CUTTER_CUTS_FILE";
pub const INPUT_ROOT: &str = "CUTTER_INPUT_ROOT";
pub const OUTPUT_DIR: &str = "CUTTER_OUTPUT_DIR";
pub const ASSETS_DIR: &str = "CUTTER_ASSETS_DIR";
pub const BOUNDS_POLICY: &str = "CUTTER_BOUNDS_POLICY";

pub const DEFAULT_SETTINGS: &[SettingDef] = &[
    SettingDef {
        key: CUTS_FILE,
        default: "cuts.txt",
        description: "Cut sheet to read",
    },
    SettingDef {
        key: INPUT_ROOT,
        default: "input",
        description: "Directory that header image names are relative to",
    },
    SettingDef {
        key: OUTPUT_DIR,
        default: "output",
        description: "Root of the mirrored output tree",
    },
    SettingDef {
        key: ASSETS_DIR,
        default: "assets",
        description: "Directory holding grid.png, gridx.png, gridy.png, gridxy.png",
    },
    SettingDef {
        key: BOUNDS_POLICY,
        default: "pad",
        description: "Cuts past the image edge: 'pad' with transparency or 'reject'",
    },
];

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS
        .iter()
        .find(|d| d.key == key)
        .map(|d| d.default)
}

/// `--help` section listing every environment setting.
pub fn settings_help() -> String {
    let mut help = String::from("Environment:\n");
    for def in DEFAULT_SETTINGS {
        help.push_str(&format!(
            "  {:<22} {} [default: {}]\n",
            def.key, def.description, def.default
        ));
    }
    help
}
