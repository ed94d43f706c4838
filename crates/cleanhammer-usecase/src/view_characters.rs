//! ViewCharacters - List the roster

use cleanhammer_domain::Character;

use crate::port::{PortError, ViewCharactersPort};

pub struct ViewCharacters<P> {
    list_port: P,
}

impl<P: ViewCharactersPort> ViewCharacters<P> {
    pub fn new(list_port: P) -> Self {
        Self { list_port }
    }

    /// The roster exactly as the adapter reports it (no sorting, no filtering)
    pub async fn view_all_characters(&self) -> Result<Vec<Character>, PortError> {
        self.list_port.view_characters().await
    }
}
