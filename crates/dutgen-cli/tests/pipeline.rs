//! End-to-end runs of both generators over CSV inputs.

use std::fs;
use std::path::{Path, PathBuf};

use dutgen_cli::pipeline::{load_aliases, resolve_sheet, run_mapping, run_struct};
use dutgen_core::{MappingColumns, MappingOptions};
use dutgen_map::AliasConfig;
use dutgen_model::LogicalField;
use dutgen_report::{write_mapping_file, write_struct_artifacts};
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

fn shipped_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/modbus_ai_config.json")
}

fn simple_aliases() -> AliasConfig {
    AliasConfig::new([
        (LogicalField::Name, vec!["name"]),
        (LogicalField::Address, vec!["address"]),
        (LogicalField::Scale, vec!["scale"]),
        (LogicalField::Unit, vec!["unit"]),
        (LogicalField::Offset, vec!["offset"]),
    ])
}

const REGISTERS: &str = "Temp Sensor,uint16,100,\n\
                         Bad Row,nonsense,101,\n\
                         Pressure,float,102.0,note\n";

const STRUCT_SHEET: &str = "Name,Address,Scale,Unit\n\
                            Temp 1,100,0.1,C\n\
                            Temp 1,101,,\n\
                            Broken,abc,1,\n";

#[test]
fn csv_has_a_single_default_sheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "regs.csv", REGISTERS);
    assert_eq!(resolve_sheet(&path, None).expect("sheet"), "Sheet1");
    assert_eq!(resolve_sheet(&path, Some("Other")).expect("sheet"), "Other");
}

#[test]
fn mapping_run_on_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "regs.csv", REGISTERS);
    let columns = MappingColumns::from_letters("A", "B", "C", Some("D")).expect("letters");

    let run = run_mapping(&path, None, &MappingOptions::new(columns)).expect("run");
    assert_eq!(run.sheet, "Sheet1");
    assert_eq!(run.batch.records.len(), 2);
    assert_eq!(run.batch.skipped_rows, 1);
    insta::assert_snapshot!(run.text.trim_end());

    let written = write_mapping_file(dir.path(), &run.text).expect("write");
    assert_eq!(fs::read_to_string(written).expect("read"), run.text);
}

#[test]
fn mapping_run_reads_unused_information_column_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "regs.csv", REGISTERS);
    let columns = MappingColumns::from_letters("A", "B", "C", Some("Z")).expect("letters");

    let run = run_mapping(&path, None, &MappingOptions::new(columns)).expect("run");
    assert_eq!(run.batch.records.len(), 2);
    assert!(run.text.lines().all(|line| line.ends_with("Information: ;*)")));
}

#[test]
fn mapping_run_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let columns = MappingColumns::from_letters("A", "B", "C", None).expect("letters");
    let missing = dir.path().join("missing.csv");

    assert!(run_mapping(&missing, None, &MappingOptions::new(columns)).is_err());
}

#[test]
fn struct_run_renders_csv_sheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "plant.csv", STRUCT_SHEET);

    let run = run_struct(&path, "Sheet1", &simple_aliases()).expect("run");
    assert_eq!(run.batch.skipped_rows, 1);
    assert_eq!(run.artifacts.dut_name, "Plant_sheet1");
    assert_eq!(run.batch.columns.index(LogicalField::Offset), None);
    insta::assert_snapshot!(run.artifacts.struct_text);

    let paths = write_struct_artifacts(dir.path(), &run.artifacts).expect("write");
    assert_eq!(paths.text, dir.path().join("plant_Sheet1_modbus_struct.txt"));
    let tcdut = fs::read_to_string(&paths.tcdut).expect("read");
    assert!(tcdut.contains("<DUT Name=\"Plant_sheet1\""));
    assert!(tcdut.contains(&run.artifacts.struct_text));
}

#[test]
fn struct_run_without_valid_rows_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "plant.csv", "Name,Address\nPump,n/a\nValve,\n");

    let err = run_struct(&path, "Sheet1", &simple_aliases()).expect_err("no rows");
    assert!(format!("{err:#}").contains("no valid variables"));
}

#[test]
fn shipped_alias_config_resolves_common_headers() {
    let aliases = load_aliases(Some(&shipped_config())).expect("load shipped config");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "skid.csv",
        "Tag,Modbus Address,Data Type,Scale,Units,Offset,Description\n\
         Flow Rate,200,REAL,0.01,m3/h,0,main line\n",
    );

    let run = run_struct(&path, "Sheet1", &aliases).expect("run");
    let columns = &run.batch.columns;
    assert_eq!(columns.index(LogicalField::Name), Some(0));
    assert_eq!(columns.index(LogicalField::Address), Some(1));
    assert_eq!(columns.index(LogicalField::Unit), Some(4));
    assert_eq!(run.batch.records[0].name, "FlowRate");
    assert_eq!(run.batch.records[0].unit, "m3/h");
}

#[test]
fn missing_alias_config_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_aliases(Some(&dir.path().join("absent.json"))).expect_err("missing");
    assert!(format!("{err:#}").contains("alias configuration"));
}

#[test]
fn mapping_run_on_workbook_uses_absolute_letters() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("skid.xlsx");
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Registers").expect("sheet name");
    sheet.write_string(0, 1, "Temp Sensor").expect("write");
    sheet.write_string(0, 2, "uint16").expect("write");
    sheet.write_number(0, 3, 100.0).expect("write");
    sheet.write_string(1, 1, "Pressure").expect("write");
    sheet.write_string(1, 2, "float").expect("write");
    sheet.write_number(1, 3, 102.5).expect("write");
    workbook.save(&path).expect("save workbook");

    let columns = MappingColumns::from_letters("B", "C", "D", Some("E")).expect("letters");
    let run = run_mapping(&path, None, &MappingOptions::new(columns)).expect("run");

    assert_eq!(run.sheet, "Registers");
    let lines: Vec<&str> = run.text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("VarTempSensor"));
    assert!(lines[0].contains("ModbusAddress: 100 "));
    assert!(lines[1].contains("ModbusAddress: 102.5 "));
    assert!(lines[1].ends_with("Information: ;*)"));
}
