/// Config member map — admins and members flattened into one ordered map.
///
/// `true` marks an admin. Admins are inserted first; members are appended in
/// iteration order only if not already present, so an admin is never
/// downgraded by also appearing in the member list.

use indexmap::IndexMap;

pub fn create_config_member_map<M, A>(members: M, admins: A) -> IndexMap<String, bool>
where
    M: IntoIterator,
    M::Item: AsRef<str>,
    A: IntoIterator,
    A::Item: AsRef<str>,
{
    let mut member_map: IndexMap<String, bool> = admins
        .into_iter()
        .map(|admin| (admin.as_ref().to_string(), true))
        .collect();

    for member in members {
        let member = member.as_ref();
        if !member_map.contains_key(member) {
            member_map.insert(member.to_string(), false);
        }
    }

    log::debug!(
        "Config member map: {} entries, {} admin(s)",
        member_map.len(),
        member_map.values().filter(|is_admin| **is_admin).count()
    );
    member_map
}

/// Render a member map as a JSON object, keys in insertion order.
#[cfg(feature = "serde")]
pub fn member_map_to_json(member_map: &IndexMap<String, bool>) -> Result<String, serde_json::Error> {
    serde_json::to_string(member_map)
}
