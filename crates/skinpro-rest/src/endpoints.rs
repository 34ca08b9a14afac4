//! Backend endpoint paths, under the conventional `resource/action[/id]`
//! naming scheme.

pub const ITEM_LIST: &str = "item/list";
pub const ITEM_CREATE: &str = "item/create";
pub const ITEM_UPDATE: &str = "item/update";
pub const ITEM_DELETE: &str = "item/delete";

// Games are "jogos" on the wire.
pub const GAME_LIST: &str = "jogo/list";
pub const GAME_CREATE: &str = "jogo/create";
pub const GAME_UPDATE: &str = "jogo/update";
pub const GAME_DELETE: &str = "jogo/delete";
