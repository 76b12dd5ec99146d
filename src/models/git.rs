/// Repository facts gathered by the VCS inspector.
///
/// Fields degrade independently: a query that fails or times out leaves
/// its field `None` without affecting the other.
#[derive(Default, Debug, Clone)]
pub struct GitInfo {
    pub branch: Option<String>,
    pub is_clean: Option<bool>,
}
