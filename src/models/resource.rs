/// A curated learning resource. The catalogue is static data compiled into
/// the binary, so everything here borrows for 'static.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub creator: &'static str,
    pub kind: &'static str,
    pub level: &'static str,
    pub category: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}
