// Editor state: an immutable session record, the command reducer that
// produces the next record, and the table holding live sessions.

pub mod command;
pub mod handlers;
pub mod session;
pub mod table;

pub use command::EditorCommand;
pub use session::{CommandError, EditorSession, SessionView};
pub use table::SessionTable;
