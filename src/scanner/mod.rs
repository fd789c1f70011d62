mod list;

pub use self::list::list_individual_keys;
