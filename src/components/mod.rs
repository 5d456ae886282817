//! UI Components
//!
//! Layout pieces and one card per demonstrated concept.

mod card;
mod modal;
mod layout;
mod props_demo;
mod state_demo;
mod effect_demo;
mod form_demo;
mod ref_demo;
mod reducer_demo;
mod counter_demo;
mod memo_demo;
mod context_demo;
mod children_demo;
mod portal_demo;
mod error_boundary_demo;
mod lazy_demo;
mod log_panel;

pub use card::Card;
pub use modal::Modal;
pub use layout::{Footer, Grid, Header, Page};
pub use props_demo::PropsDemo;
pub use state_demo::StateDemo;
pub use effect_demo::EffectDemo;
pub use form_demo::FormDemo;
pub use ref_demo::RefDemo;
pub use reducer_demo::ReducerDemo;
pub use counter_demo::CounterDemo;
pub use memo_demo::MemoCallbackDemo;
pub use context_demo::ContextDemo;
pub use children_demo::ChildrenDemo;
pub use portal_demo::PortalDemo;
pub use error_boundary_demo::ErrorBoundaryDemo;
pub use lazy_demo::LazyDemo;
pub use log_panel::LogPanel;
