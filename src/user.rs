use crate::game::GameEntry;

/// One user's owned games, in profile-page order. Immutable once extracted.
pub struct UserLibrary {
    pub persona_name: String,
    pub games: Vec<GameEntry>,
}

impl std::fmt::Display for UserLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.persona_name)
    }
}
