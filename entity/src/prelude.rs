pub use super::account::Entity as Account;
pub use super::client::Entity as Client;
pub use super::external_login::Entity as ExternalLogin;
pub use super::invoice::Entity as Invoice;
pub use super::project::Entity as Project;
pub use super::session::Entity as Session;
pub use super::side_project::Entity as SideProject;
pub use super::timer::Entity as Timer;
