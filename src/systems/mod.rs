pub mod audio;
pub mod collision;
pub mod game_over;
pub mod input;
pub mod movement;
pub mod render;
