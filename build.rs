include!("src/commands/registry.rs");

fn main() {
  tauri_plugin::Builder::new(COMMANDS).build();
}
