use crate::core::{GameUpdate, Session};

pub struct GameRenderState<'a> {
    pub session: &'a Session,
    pub view: &'a ViewState,
    pub last_update: Option<GameUpdate>,
}

/// Camera and texture settings driven by the keyboard. Purely cosmetic: the
/// puzzle never reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub rotation_degrees: f32,
    pub field_of_view: f32,
    pub textures: bool,
}

impl ViewState {
    pub const MIN_FOV: f32 = 10.0;
    pub const MAX_FOV: f32 = 90.0;
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            rotation_degrees: 0.0,
            field_of_view: 45.0,
            textures: false,
        }
    }
}
