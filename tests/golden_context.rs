use focus_core::types::{
    CuratedNames, FocusAreaContext, FullyQualifiedNames, NameOccurrence, Position, Range,
};
use serde_json::Value;

fn make_context(with_selection: bool) -> FocusAreaContext {
    FocusAreaContext {
        code_block: "let x = 1;".to_string(),
        extended_code_block: "// above\nlet x = 1;\n// below".to_string(),
        selection_inside_extended_code_block: with_selection.then(|| Range {
            start: Position::new(1, 0),
            end: Position::new(1, 10),
        }),
        names: CuratedNames {
            simple_names: vec!["x".to_string()],
            fully_qualified_names: FullyQualifiedNames {
                used: vec![NameOccurrence::new("mod_a", "item")],
            },
        },
    }
}

#[test]
fn golden_context_serialization() {
    let context = make_context(true);
    let json_str = serde_json::to_string(&context).unwrap();

    // Check key order by looking at the string (brittle but strict for
    // "golden" checks): codeBlock -> extendedCodeBlock -> selection -> names.
    let code_pos = json_str.find("\"codeBlock\":").unwrap();
    let ext_pos = json_str.find("\"extendedCodeBlock\":").unwrap();
    let sel_pos = json_str
        .find("\"selectionInsideExtendedCodeBlock\":")
        .unwrap();
    let names_pos = json_str.find("\"names\":").unwrap();

    assert!(code_pos < ext_pos);
    assert!(ext_pos < sel_pos);
    assert!(sel_pos < names_pos);

    let parsed: Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(
        parsed["selectionInsideExtendedCodeBlock"]["start"]["line"],
        1
    );
    assert_eq!(
        parsed["selectionInsideExtendedCodeBlock"]["end"]["character"],
        10
    );
    assert_eq!(parsed["names"]["simpleNames"][0], "x");
    assert_eq!(
        parsed["names"]["fullyQualifiedNames"]["used"][0]["source"],
        "mod_a"
    );
    assert_eq!(
        parsed["names"]["fullyQualifiedNames"]["used"][0]["symbol"],
        "item"
    );
}

#[test]
fn golden_pure_cursor_omits_selection_key() {
    let context = make_context(false);
    let json_str = serde_json::to_string(&context).unwrap();

    assert!(!json_str.contains("selectionInsideExtendedCodeBlock"));

    let parsed: Value = serde_json::from_str(&json_str).unwrap();
    assert!(parsed.get("selectionInsideExtendedCodeBlock").is_none());
}

#[test]
fn golden_context_round_trips() {
    let context = make_context(true);
    let json_str = serde_json::to_string(&context).unwrap();
    let back: FocusAreaContext = serde_json::from_str(&json_str).unwrap();
    assert_eq!(back, context);
}
