const CRATE_PREFIX: &str = "rorg-";
const FACADE: &str = "rorg";

/// Maps a short crate name to its package name: `wire` becomes `rorg-wire`.
///
/// The facade and `xtask` keep their own names.
#[must_use]
pub fn normalize_project_name(project: &str) -> String {
    if project == FACADE || project == "xtask" || project.starts_with(CRATE_PREFIX) {
        project.to_owned()
    } else {
        format!("{CRATE_PREFIX}{project}")
    }
}
