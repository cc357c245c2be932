mod args;
pub use self::args::QueryArgs;

mod common;
pub use self::common::{Query, QueryCommon};

mod search;
pub use self::search::SearchQuery;

mod lookup;
pub use self::lookup::LookupQuery;
