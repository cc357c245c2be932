mod envelope;
pub use self::envelope::Envelope;

mod media;
pub use self::media::{LookupSort, Media};

mod record;
pub use self::record::Record;
