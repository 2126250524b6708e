// 求解アプリケーションサービス

pub mod event;
pub mod service;
pub mod session;

pub use event::{ChannelObserver, SolveEvent};
pub use service::SolverService;
pub use session::SolverSession;
