mod peaks;
mod remote_location;
mod request_options;
mod track;

pub use peaks::Peaks;
pub use remote_location::{RemoteLocation, RoutingError, RoutingTable, ServiceRoute};
pub use request_options::{OptionsError, RequestOptions, ResolverDefaults, WaveformRequest};
pub use track::{TrackFormat, TrackId, TrackIdError};
