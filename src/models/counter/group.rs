use crate::models::table_filter::locale_cmp;

/// Key used when a name has no words.
pub const EMPTY_GROUP_KEY: &str = "-";

/// A display section: all items whose name starts with `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    pub key: String,
    pub items: Vec<T>,
}

/// First whitespace-separated word of a name.
pub fn group_key(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(EMPTY_GROUP_KEY)
}

/// Section items by the first word of their name. Groups come out in locale
/// order of their key; items keep their incoming order within a group.
pub fn group_by_first_word<T, F>(items: Vec<T>, name_of: F) -> Vec<Group<T>>
where
    F: Fn(&T) -> &str,
{
    let mut groups: Vec<Group<T>> = Vec::new();
    for item in items {
        let key = group_key(name_of(&item)).to_string();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.items.push(item),
            None => groups.push(Group { key, items: vec![item] }),
        }
    }
    groups.sort_by(|a, b| locale_cmp(&a.key, &b.key));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::counter::Counter;

    fn counter(id: i64, name: &str) -> Counter {
        Counter {
            id,
            name: name.into(),
            counter_code: format!("C{id}"),
            quota: None,
            schedule_start: None,
            schedule_end: None,
            description: None,
        }
    }

    #[test]
    fn groups_by_first_word_in_key_order() {
        let counters = vec![
            counter(1, "Loket 1"),
            counter(2, "Imigrasi Paspor"),
            counter(3, "Loket 2"),
            counter(4, "Bank BRI"),
        ];
        let groups = group_by_first_word(counters, |c| c.name.as_str());
        let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Bank", "Imigrasi", "Loket"]);
        let loket: Vec<_> = groups[2].items.iter().map(|c| c.id).collect();
        assert_eq!(loket, vec![1, 3]);
    }

    #[test]
    fn every_item_lands_in_exactly_one_group() {
        let counters: Vec<_> = ["A x", "B y", "A z", "", "  ", "C"]
            .iter()
            .enumerate()
            .map(|(i, n)| counter(i as i64, n))
            .collect();
        let groups = group_by_first_word(counters.clone(), |c| c.name.as_str());
        let mut seen: Vec<i64> = groups.iter().flat_map(|g| g.items.iter().map(|c| c.id)).collect();
        seen.sort();
        assert_eq!(seen, (0..counters.len() as i64).collect::<Vec<_>>());
    }

    #[test]
    fn blank_names_use_placeholder_key() {
        assert_eq!(group_key("   "), EMPTY_GROUP_KEY);
        assert_eq!(group_key("Samsat Keliling"), "Samsat");
    }

    #[test]
    fn first_word_grouping_is_case_sensitive() {
        let groups = group_by_first_word(vec![counter(1, "loket a"), counter(2, "Loket b")], |c| c.name.as_str());
        assert_eq!(groups.len(), 2);
    }
}
