/// Return the candidates containing `query` as a case-insensitive substring.
///
/// An empty query yields every candidate. Matching never reorders: results
/// keep the order of `candidates`.
pub fn filter_options(candidates: &[String], query: &str) -> Vec<String> {
	if query.is_empty() {
		return candidates.to_vec();
	}

	let needle = query.to_lowercase();
	candidates
		.iter()
		.filter(|candidate| candidate.to_lowercase().contains(&needle))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn areas() -> Vec<String> {
		["Koramangala 5th Block", "Indiranagar", "BTM", "Koramangala 7th Block"]
			.into_iter()
			.map(String::from)
			.collect()
	}

	#[test]
	fn empty_query_returns_everything_in_order() {
		assert_eq!(filter_options(&areas(), ""), areas());
	}

	#[test]
	fn matches_any_casing_of_any_substring() {
		let candidates = areas();
		for candidate in &candidates {
			let chars: Vec<char> = candidate.chars().collect();
			for start in 0..chars.len() {
				for end in start + 1..=chars.len() {
					let fragment: String = chars[start..end].iter().collect();
					for query in [fragment.to_uppercase(), fragment.to_lowercase()] {
						let matches = filter_options(&candidates, &query);
						assert!(
							matches.contains(candidate),
							"'{query}' should match '{candidate}'"
						);
					}
				}
			}
		}
	}

	#[test]
	fn preserves_catalog_order_for_partial_matches() {
		assert_eq!(
			filter_options(&areas(), "kORa"),
			["Koramangala 5th Block", "Koramangala 7th Block"]
		);
	}

	#[test]
	fn no_match_yields_empty_list() {
		assert!(filter_options(&areas(), "whitefield").is_empty());
		assert!(filter_options(&[], "any").is_empty());
	}
}
