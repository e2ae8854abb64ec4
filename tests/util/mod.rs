
pub use setup::TestSetupExt;
