//! Rendering tests for mapping lists, STRUCT text and TcDUT documents.

use dutgen_model::{CanonicalType, MappingRecord, StructRecord};
use dutgen_report::{
    MAPPING_FILE_NAME, StructArtifacts, render_mapping_file, render_tcdut_with_id,
    write_mapping_file, write_struct_artifacts,
};
use quick_xml::Reader;
use quick_xml::events::Event;
use uuid::Uuid;

fn field(name: &str, address: i64, scale: &str, unit: &str, offset: &str) -> StructRecord {
    StructRecord {
        name: name.to_string(),
        address,
        scale: scale.to_string(),
        unit: unit.to_string(),
        offset: offset.to_string(),
    }
}

fn plant_fields() -> Vec<StructRecord> {
    vec![
        field("Temp1", 100, "1", "C", "0"),
        field("Temp1_1", 101, "0.1", "", "0"),
        field("Pressure", 102, "1", "bar", "-1"),
    ]
}

fn fixed_id() -> Uuid {
    Uuid::from_u128(0x9f1c_22d4_07a3_4e5b_8c61_d2e0_b4a7_3f10)
}

fn mapping_records() -> Vec<MappingRecord> {
    vec![
        MappingRecord {
            name: "VarTempSensor".to_string(),
            data_type: CanonicalType::Uint,
            address: Some(100.0),
            information: String::new(),
        },
        MappingRecord {
            name: "VarPressure".to_string(),
            data_type: CanonicalType::Real,
            address: Some(102.0),
            information: "note".to_string(),
        },
    ]
}

#[test]
fn mapping_file_has_one_line_per_record() {
    let text = render_mapping_file(&mapping_records());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(text.ends_with(";*)\n"));

    assert!(lines[0].starts_with("VarTempSensor"));
    assert!(lines[0].contains(": UINT"));
    assert!(lines[0].contains("ModbusAddress: 100 "));
    assert!(lines[0].ends_with("Information: ;*)"));

    assert!(lines[1].starts_with("VarPressure"));
    assert!(lines[1].contains("DataType: REAL"));
    assert!(lines[1].contains("ModbusAddress: 102 "));
    assert!(lines[1].ends_with("Information: note;*)"));
}

#[test]
fn struct_text_is_aligned() {
    let artifacts =
        StructArtifacts::build_with_id("plant", "Sheet 1", &plant_fields(), fixed_id())
            .expect("render");
    assert_eq!(artifacts.dut_name, "Plant_sheet1");
    assert_eq!(artifacts.output_base, "plant_Sheet1_modbus_struct");
    insta::assert_snapshot!(artifacts.struct_text);
}

#[test]
fn colons_share_one_column() {
    let artifacts = StructArtifacts::build("plant", "Sheet1", &plant_fields()).expect("render");
    let columns: Vec<usize> = artifacts
        .struct_text
        .lines()
        .filter(|line| line.starts_with("    "))
        .map(|line| line.find(':').expect("colon"))
        .collect();
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(|column| *column == columns[0]));
    // "    " + "Pressure" + 4 spaces
    assert_eq!(columns[0], 16);
}

#[test]
fn tcdut_document_layout() {
    let struct_text = "TYPE Plant_sheet1 :\nSTRUCT\n    A    : UINT; (* ModbusAddress: 1;  Scale: 1;  Unit: ;  Offset: 0; *)\nEND_STRUCT\nEND_TYPE";
    let xml = render_tcdut_with_id("Plant_sheet1", struct_text, fixed_id()).expect("render");
    let expected = format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <TcPlcObject Version=\"1.1.0.1\">\n\
         \x20 <DUT Name=\"Plant_sheet1\" Id=\"{{9f1c22d4-07a3-4e5b-8c61-d2e0b4a73f10}}\">\n\
         \x20   <Declaration><![CDATA[\n{struct_text}\n]]></Declaration>\n\
         \x20 </DUT>\n\
         </TcPlcObject>\n"
    );
    assert_eq!(xml, expected);
}

#[test]
fn tcdut_parses_back_to_the_struct_text() {
    let artifacts =
        StructArtifacts::build_with_id("plant", "Sheet1", &plant_fields(), fixed_id())
            .expect("render");

    let mut reader = Reader::from_str(&artifacts.tcdut);
    let mut dut_attrs = Vec::new();
    let mut declaration = None;
    loop {
        match reader.read_event().expect("well-formed xml") {
            Event::Start(element) if element.name().as_ref() == b"DUT" => {
                for attr in element.attributes() {
                    let attr = attr.expect("attribute");
                    dut_attrs.push((
                        String::from_utf8(attr.key.as_ref().to_vec()).expect("utf-8"),
                        String::from_utf8(attr.value.to_vec()).expect("utf-8"),
                    ));
                }
            }
            Event::CData(data) => {
                declaration = Some(String::from_utf8(data.into_inner().to_vec()).expect("utf-8"));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert_eq!(
        dut_attrs,
        vec![
            ("Name".to_string(), "Plant_sheet1".to_string()),
            (
                "Id".to_string(),
                "{9f1c22d4-07a3-4e5b-8c61-d2e0b4a73f10}".to_string()
            ),
        ]
    );
    assert_eq!(
        declaration.expect("declaration"),
        format!("\n{}\n", artifacts.struct_text)
    );
}

/// Concatenated contents of every CDATA section in the document.
fn cdata_content(xml: &str) -> String {
    let mut reader = Reader::from_str(xml);
    let mut content = String::new();
    loop {
        match reader.read_event().expect("well-formed xml") {
            Event::CData(data) => {
                content.push_str(&String::from_utf8(data.into_inner().to_vec()).expect("utf-8"));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    content
}

#[test]
fn tcdut_keeps_cdata_terminator_in_sheet_text() {
    let fields = vec![
        field("Level", 10, "1", "a]]>b", "0"),
        field("Flow", 11, "0.5]]>", "]]>]]>", "-1"),
    ];
    let artifacts =
        StructArtifacts::build_with_id("plant", "Sheet1", &fields, fixed_id()).expect("render");

    assert!(artifacts.struct_text.contains("Unit: a]]>b;"));
    assert_eq!(
        cdata_content(&artifacts.tcdut),
        format!("\n{}\n", artifacts.struct_text)
    );
    assert!(artifacts.tcdut.ends_with("]]></Declaration>\n  </DUT>\n</TcPlcObject>\n"));
}

#[test]
fn writes_struct_outputs_next_to_each_other() {
    let dir = tempfile::tempdir().expect("tempdir");
    let artifacts =
        StructArtifacts::build_with_id("plant", "Sheet1", &plant_fields(), fixed_id())
            .expect("render");
    let paths = write_struct_artifacts(dir.path(), &artifacts).expect("write");

    assert_eq!(paths.text, dir.path().join("plant_Sheet1_modbus_struct.txt"));
    assert_eq!(paths.tcdut, dir.path().join("plant_Sheet1_modbus_struct.TcDUT"));
    assert_eq!(
        std::fs::read_to_string(&paths.text).expect("read"),
        artifacts.struct_text
    );
    assert_eq!(
        std::fs::read_to_string(&paths.tcdut).expect("read"),
        artifacts.tcdut
    );
}

#[test]
fn mapping_file_is_overwritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(MAPPING_FILE_NAME), "stale\nstale\nstale\n").expect("seed");

    let text = render_mapping_file(&mapping_records());
    let path = write_mapping_file(dir.path(), &text).expect("write");
    let written = std::fs::read_to_string(path).expect("read");
    assert_eq!(written, text);
    assert_eq!(written.lines().count(), 2);
}
