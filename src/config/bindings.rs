use serde::{Deserialize, Serialize};
/// Characters bound to navigator commands. Arrow keys, Enter, Backspace and
/// Delete are always active in addition to these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: char,
    pub down: char,
    pub delete: char,
    pub view: char,
    pub mark: char,
    pub copy: char,
    #[serde(rename = "move")]
    pub relocate: char,
    pub quit: char,
}
impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: 'k',
            down: 'j',
            delete: 'd',
            view: 'p',
            mark: 's',
            copy: 'c',
            relocate: 'z',
            quit: 'q',
        }
    }
}
impl KeyBindings {
    pub fn entries(&self) -> [(&'static str, char); 8] {
        [
            ("up", self.up),
            ("down", self.down),
            ("delete", self.delete),
            ("view", self.view),
            ("mark", self.mark),
            ("copy", self.copy),
            ("move", self.relocate),
            ("quit", self.quit),
        ]
    }
    /// Footer text listing the active bindings.
    pub fn hint(&self) -> String {
        format!(
            "↑↓ Navigate | Enter Open | Bksp Up | {} View | {} Delete | {} Mark | {} Copy | {} Move | {} Quit",
            self.view, self.delete, self.mark, self.copy, self.relocate, self.quit
        )
    }
}
