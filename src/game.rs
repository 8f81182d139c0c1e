#[derive(Debug, Clone)]
pub struct GameEntry {
    pub app_id: u32,
    pub name: String,
}

impl GameEntry {
    pub const fn new(app_id: u32, name: String) -> Self {
        Self { app_id, name }
    }
}

// The app id is the join key across users; names are display-only.
impl PartialEq<Self> for GameEntry {
    fn eq(&self, other: &Self) -> bool {
        other.app_id == self.app_id
    }
}
