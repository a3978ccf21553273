/// One named rule with its parameters, e.g. `range:8,16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub params: Vec<String>,
}

/// Splits a rule chain such as `required;range:8,16;username`.
///
/// Entries split on `;`, each entry on its first `:` into a name and
/// comma-separated parameters. Entries with an empty name are dropped.
pub fn parse_rules(chain: &str) -> Vec<Rule> {
    chain
        .split(';')
        .filter_map(|entry| {
            let (name, params): (&str, Vec<String>) = match entry.split_once(':') {
                Some((name, params)) => (name, params.split(',').map(str::to_string).collect()),
                None => (entry, Vec::new()),
            };
            if name.is_empty() {
                return None;
            }
            Some(Rule {
                name: name.to_string(),
                params,
            })
        })
        .collect()
}
