const COMMANDS: &[&str] = &[
    "set_user_default",
    "get_user_default",
    "save_keychain",
    "load_keychain",
    "show_hud",
    "close_hud",
    "set_theme",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
