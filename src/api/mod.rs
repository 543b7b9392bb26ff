pub mod dashboard;
pub mod user;

pub use self::{
    dashboard::{Layout, NavigationEntry, View},
    user::{Email, Role},
};
