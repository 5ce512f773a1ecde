use super::*;
use crate::range::RangeBounds;

fn catalog() -> Vec<String> {
	["Chinese", "Italian", "Mexican", "Thai"]
		.into_iter()
		.map(String::from)
		.collect()
}

fn defaults() -> (SingleSelect, MultiSelect, DualRange) {
	(SingleSelect::new(), MultiSelect::new(), DualRange::default())
}

#[test]
fn defaults_produce_an_unconstrained_query() {
	let (area, cuisines, price) = defaults();
	let query = build_query(&area, &cuisines, &price, "", "");
	assert!(query.is_unconstrained());
	assert!(query.entries().is_empty());
	assert_eq!(serde_json::to_string(&query).expect("json"), "{}");
}

#[test]
fn only_location_is_emitted_for_a_lone_area() {
	let (mut area, cuisines, price) = defaults();
	area.commit("Koramangala");
	let query = build_query(&area, &cuisines, &price, "", "  ");

	assert_eq!(
		query,
		QueryObject {
			location: Some("Koramangala".into()),
			..QueryObject::default()
		}
	);
	insta::assert_snapshot!(
		serde_json::to_string(&query).expect("json"),
		@r#"{"location":"Koramangala"}"#
	);
}

#[test]
fn cuisine_uses_the_first_selection_only() {
	let (area, mut cuisines, price) = defaults();
	let catalog = catalog();
	cuisines.toggle("Italian", &catalog);
	cuisines.toggle("Chinese", &catalog);

	let query = build_query(&area, &cuisines, &price, "", "");
	assert_eq!(query.cuisine.as_deref(), Some("Italian"));
	assert_eq!(query.entries(), vec![("cuisine", "Italian".to_string())]);
}

#[test]
fn cuisine_follows_removal_of_the_first_selection() {
	let (area, mut cuisines, price) = defaults();
	let catalog = catalog();
	cuisines.toggle("Italian", &catalog);
	cuisines.toggle("Chinese", &catalog);
	cuisines.remove_token("Italian", &catalog);

	let query = build_query(&area, &cuisines, &price, "", "");
	assert_eq!(query.cuisine.as_deref(), Some("Chinese"));
}

#[test]
fn price_keys_are_gated_independently() {
	let (area, cuisines, mut price) = defaults();
	price.set_min(500);
	let query = build_query(&area, &cuisines, &price, "", "");
	assert_eq!((query.price_min, query.price_max), (Some(500), None));

	let mut upper_only = DualRange::default();
	upper_only.set_max(1500);
	let query = build_query(&area, &cuisines, &upper_only, "", "");
	assert_eq!((query.price_min, query.price_max), (None, Some(1500)));
}

#[test]
fn price_keys_follow_configured_bounds() {
	let (area, cuisines, _) = defaults();
	let mut price = DualRange::new(RangeBounds::new(0, 1000).expect("bounds"));
	price.set_min(100);
	let query = build_query(&area, &cuisines, &price, "", "");
	assert_eq!((query.price_min, query.price_max), (Some(100), None));
}

#[test]
fn rating_is_parsed_as_a_decimal() {
	let (area, cuisines, price) = defaults();
	let query = build_query(&area, &cuisines, &price, " 4.5 ", "");
	assert_eq!(query.min_rating, Some(4.5));
}

#[test]
fn scalars_read_their_leading_number() {
	let (area, cuisines, price) = defaults();
	let assembler = RequestAssembler::new(MalformedInput::Reject);
	let cases = [
		("4.5 stars", "3.7", 4.5, 3),
		("3abc", "5abc", 3.0, 5),
		(".5", "+8 please", 0.5, 8),
		("4.", "12.9", 4.0, 10),
		("-1.5e1x", "-2e3", -15.0, 1),
	];
	for (rating, count, expected_rating, expected_count) in cases {
		let query = assembler
			.assemble(&area, &cuisines, &price, rating, count)
			.expect("leading digits are well formed");
		assert_eq!(query.min_rating, Some(expected_rating), "rating {rating:?}");
		assert_eq!(query.max_results, Some(expected_count), "count {count:?}");
	}
}

#[test]
fn text_without_leading_digits_is_malformed() {
	let (area, cuisines, price) = defaults();
	for raw in ["abc", "-", ".", "+.e5", "x5", "Infinity", "1e999"] {
		let query = build_query(&area, &cuisines, &price, raw, "");
		assert_eq!(query.min_rating, None, "rating {raw:?}");
	}
	for raw in ["abc", "-", ".5", "e3"] {
		let query = build_query(&area, &cuisines, &price, "", raw);
		assert_eq!(query.max_results, None, "count {raw:?}");
	}
}

#[test]
fn max_results_clamps_into_range() {
	let (area, cuisines, price) = defaults();
	let cases = [
		("0", 1),
		("57", 10),
		("-3", 1),
		("7", 7),
		(" 10 ", 10),
		("99999999999999999999999", 10),
		("-99999999999999999999999", 1),
	];
	for (raw, expected) in cases {
		let query = build_query(&area, &cuisines, &price, "", raw);
		assert_eq!(query.max_results, Some(expected), "input {raw:?}");
	}
}

#[test]
fn omit_policy_drops_malformed_scalars() {
	let (area, cuisines, price) = defaults();
	let assembler = RequestAssembler::new(MalformedInput::Omit);
	let query = assembler
		.assemble(&area, &cuisines, &price, "great", "ten")
		.expect("omit never fails");
	assert_eq!(query.min_rating, None);
	assert_eq!(query.max_results, None);
	assert_eq!(query, build_query(&area, &cuisines, &price, "great", "ten"));
}

#[test]
fn reject_policy_reports_the_offending_field() {
	let (area, cuisines, price) = defaults();
	let assembler = RequestAssembler::new(MalformedInput::Reject);

	let err = assembler
		.assemble(&area, &cuisines, &price, "", " ten ")
		.expect_err("counts without digits are malformed");
	assert_eq!(
		err,
		QueryError::Malformed {
			field: "max_results",
			raw: "ten".into()
		}
	);
	assert_eq!(err.to_string(), "max_results must be a number (got 'ten')");

	let err = assembler
		.assemble(&area, &cuisines, &price, "NaN", "")
		.expect_err("non-finite ratings are malformed");
	assert!(matches!(err, QueryError::Malformed { field: "min_rating", .. }));
}

#[test]
fn policies_agree_on_well_formed_input() {
	let (mut area, mut cuisines, mut price) = defaults();
	let catalog = catalog();
	area.commit("Indiranagar");
	cuisines.toggle("Thai", &catalog);
	price.set_max(2500);

	let omit = RequestAssembler::new(MalformedInput::Omit)
		.assemble(&area, &cuisines, &price, "4", "5")
		.expect("omit");
	let reject = RequestAssembler::new(MalformedInput::Reject)
		.assemble(&area, &cuisines, &price, "4", "5")
		.expect("reject");
	assert_eq!(omit, reject);
	assert_eq!(
		omit.entries(),
		vec![
			("location", "Indiranagar".to_string()),
			("cuisine", "Thai".to_string()),
			("price_max", "2500".to_string()),
			("min_rating", "4".to_string()),
			("max_results", "5".to_string()),
		]
	);
}

#[test]
fn assembly_is_repeatable() {
	let (mut area, cuisines, price) = defaults();
	area.commit("BTM");
	let first = build_query(&area, &cuisines, &price, "3", "4");
	let second = build_query(&area, &cuisines, &price, "3", "4");
	assert_eq!(first, second);
}

#[test]
fn policy_parses_from_config_text() {
	assert_eq!("omit".parse::<MalformedInput>(), Ok(MalformedInput::Omit));
	assert_eq!(" Reject ".parse::<MalformedInput>(), Ok(MalformedInput::Reject));
	assert!("strict".parse::<MalformedInput>().is_err());
	assert_eq!(MalformedInput::Reject.as_str(), "reject");
}
