pub(crate) mod campaigns;
pub(crate) mod health;
pub(crate) mod stats;
pub(crate) mod users;
