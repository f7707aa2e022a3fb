use std::io::Write;

use folio::conf::{SettingsBuilder, TomlFileSource};
use folio::tables::{Fields, PaginationEngine, Record, SortDirection, Value, country_fields};
use rstest::*;
use tempfile::NamedTempFile;

#[fixture]
fn records() -> Vec<Record> {
	folio::tables::load_records(
		r#"[
		{"id": 1, "name": "Chad", "capital": "N'Djamena"},
		{"id": 2, "name": "Benin", "capital": "Porto-Novo"},
		{"id": 3, "name": "Mali", "capital": "Bamako"},
		{"id": 4, "name": "Malta", "capital": "Valletta"},
		{"id": 5, "name": "Niger", "capital": "Niamey"}
	]"#,
	)
	.unwrap()
}

fn settings_file(contents: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	write!(file, "{}", contents).unwrap();
	file
}

fn names(engine: &PaginationEngine<Record>) -> Vec<String> {
	engine
		.current_slice()
		.iter()
		.map(|row| row.field("name").as_text())
		.collect()
}

#[rstest]
fn test_settings_file_drives_engine(records: Vec<Record>) {
	let file = settings_file("[table]\npage_size = 2\nstart_from = 2\nsort = \"name\"\n");
	let settings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(file.path()))
		.build()
		.unwrap();

	let mut engine = folio::engine_from_settings(records, &settings).unwrap();
	assert_eq!(engine.page_count(), 3);
	assert_eq!(engine.current_page(), 2);
	assert_eq!(names(&engine), vec!["Mali", "Malta"]);

	engine.apply_sort("name", SortDirection::Descending);
	assert_eq!(engine.current_page(), 2);
	assert_eq!(names(&engine), vec!["Mali", "Chad"]);
}

#[rstest]
fn test_start_page_beyond_range_falls_back(records: Vec<Record>) {
	let file = settings_file("page_size = 10\nstart_from = 4\n");
	let settings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(file.path()))
		.build()
		.unwrap();

	let engine = folio::engine_from_settings(records, &settings).unwrap();
	assert_eq!(engine.current_page(), 1);
	assert_eq!(engine.current_slice().len(), 5);
}

#[rstest]
fn test_default_search_field(records: Vec<Record>) {
	let file = settings_file("page_size = 2\nsearch_field = \"capital\"\n");
	let settings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(file.path()))
		.build()
		.unwrap();

	let mut engine = folio::engine_from_settings(records, &settings).unwrap();
	engine.next_page();
	folio::search_default_field(&mut engine, &settings, "NIAM");

	assert_eq!(engine.current_page(), 1);
	assert_eq!(names(&engine), vec!["Niger"]);
	assert!(
		engine
			.search_by(&country_fields(), "emoji", "x")
			.is_err()
	);
	assert_eq!(engine.filtered_count(), 1);
	assert_eq!(
		engine.current_slice()[0].field("id"),
		Value::Number(5.0)
	);
}
