mod misses;
mod overrides;

pub use misses::MissReportManager;
pub use overrides::OverrideManager;
pub use overrides::extract_album_id;
