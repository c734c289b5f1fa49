//! Integration tests for the SketchConverter API
//!
//! These tests drive the full pipeline (classify, import, joint
//! insertion, serialization) through the public API.

use blocksketch::{
    SketchConverter, Sections, SketchScales,
    block::BlockKind,
    config::AppConfig,
    diagram::EdgeWeight,
    export::{self, NumberFormat},
};

/// A closed two-integrator loop with two feedback paths; both integrators
/// branch, so both get an automatic joint.
fn two_loop_source() -> String {
    [
        "skizze:",
        "   C1  S1  S2  I1  I2  C2  ",
        "               P1          ",
        "               P2          ",
        "                           ",
        "verbindungen:",
        "C1 - S1",
        "S1 - S2",
        "S2 - I1",
        "I1 - I2",
        "I1 - P1",
        "I2 - C2",
        "I2 - P2",
        "P1 - S2",
        "P2 - S1",
        "namen:",
        "C1: eingang",
        "C2: ausgang",
        "S1: sum 1",
        "S2: sum 2",
        "I1: int 1",
        "I2: int 2",
        "P1: p 1",
        "P2: p 2",
    ]
    .join("\n")
}

#[test]
fn test_two_loop_conversion_golden() {
    let expected = [
        r"\begin{tikzpicture}",
        r"",
        r"",
        r"% <coordinates>",
        r"\coordinate (eingang) at (2, 3);",
        r"\coordinate (sum 1--coord) at (4, 3);",
        r"\coordinate (sum 2--coord) at (6, 3);",
        r"\coordinate (p 2--coord) at (8, 0);",
        r"\coordinate (p 1--coord) at (8, 1.5);",
        r"\coordinate (int 1--coord) at (8, 3);",
        r"\coordinate (ajnt1--coord) at (9.6, 3);",
        r"\coordinate (int 2--coord) at (10, 3);",
        r"\coordinate (ausgang) at (12, 3);",
        r"\coordinate (ajnt2--coord) at (12, 3);",
        r"% </coordinates>",
        r"",
        r"",
        r"% <blocks>",
        r"\Summationsstelle{sum 1}{sum 1--coord}{0.4 cm}",
        r"\Summationsstelle{sum 2}{sum 2--coord}{0.4 cm}",
        r"\PGlied{p 2}{p 2--coord}{1 cm}{}",
        r"\PGlied{p 1}{p 1--coord}{1 cm}{}",
        r"\IGlied{int 1}{int 1--coord}{1 cm}{}",
        r"\Verzweigung{ajnt1}{ajnt1--coord}{2 pt}",
        r"\IGlied{int 2}{int 2--coord}{1 cm}{}",
        r"\Verzweigung{ajnt2}{ajnt2--coord}{2 pt}",
        r"% </blocks>",
        r"",
        r"",
        r"% <connections>",
        r"\draw[thick, -latex] (eingang) -- (sum 1);",
        r"\draw[thick, -latex] (sum 1) -- (sum 2);",
        r"\draw[thick, -latex] (sum 2) -- (int 1);",
        r"\draw[thick, -latex] (p 2) -- (sum 1);",
        r"\draw[thick, -latex] (p 1) -- (sum 2);",
        r"\draw[thick] (int 1) -- (ajnt1);",
        r"\draw[thick, -latex] (ajnt1) -- (p 1);",
        r"\draw[thick, -latex] (ajnt1) -- (int 2);",
        r"\draw[thick] (int 2) -- (ajnt2);",
        r"\draw[thick, -latex] (ajnt2) -- (p 2);",
        r"\draw[thick, -latex] (ajnt2) -- (ausgang);",
        r"% </connections>",
        r"",
        r"",
        r"\end{tikzpicture}",
        r"",
    ]
    .join("\n");

    let converter = SketchConverter::new(AppConfig::default());
    let tikz = converter.convert(&two_loop_source()).unwrap();
    assert_eq!(tikz, expected);
}

#[test]
fn test_pid_chain_scenario() {
    let mut sections = Sections::new();
    sections.append(blocksketch::SectionKind::Sketch, "P1 I1");
    sections.append(blocksketch::SectionKind::Sketch, "D1 C1");
    for line in ["P1 - I1", "I1 - D1", "D1 = C1"] {
        sections.append(blocksketch::SectionKind::Connections, line);
    }

    let mut diagram =
        blocksketch::build_diagram(&sections, &SketchScales::default()).unwrap();

    assert_eq!(diagram.num_blocks(), 4);
    assert_eq!(diagram.get("P1").unwrap().kind(), BlockKind::PGlied);
    assert_eq!(diagram.get("I1").unwrap().kind(), BlockKind::IGlied);
    assert_eq!(diagram.get("D1").unwrap().kind(), BlockKind::DGlied);
    assert_eq!(diagram.get("C1").unwrap().kind(), BlockKind::Coordinate);

    // Every imported connection already occupies its ordered pair.
    for (from, to) in [("P1", "I1"), ("I1", "D1"), ("D1", "C1")] {
        assert!(matches!(
            diagram.add_connection(from, to, EdgeWeight::Scalar),
            Err(blocksketch::DiagramError::DuplicateEdge { .. })
        ));
    }
}

#[test]
fn test_parse_is_reusable_and_deterministic() {
    let converter = SketchConverter::new(AppConfig::default());
    let source = two_loop_source();

    let first = converter.convert(&source).unwrap();
    let second = converter.convert(&source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_joint_insertion_is_idempotent_through_render() {
    let converter = SketchConverter::new(AppConfig::default());
    let mut diagram = converter.parse(&two_loop_source()).unwrap();
    let rendered = converter.render_tikz(&diagram).unwrap();

    diagram.insert_joints().unwrap();
    let rendered_again = converter.render_tikz(&diagram).unwrap();
    assert_eq!(rendered, rendered_again);
}

#[test]
fn test_fixed_number_format() {
    let mut sections = Sections::new();
    sections.append(blocksketch::SectionKind::Sketch, " P1");

    let diagram = blocksketch::build_diagram(&sections, &SketchScales::default()).unwrap();
    let tikz = export::serialize(&diagram, NumberFormat::Fixed(4));
    assert!(tikz.contains("\\coordinate (P1--coord) at (1.0000, 0.0000);"));
}

#[test]
fn test_missing_sketch_section_is_an_error() {
    let converter = SketchConverter::new(AppConfig::default());
    let result = converter.parse("connections:\nP1 - I1\n");
    assert!(matches!(
        result,
        Err(blocksketch::BlocksketchError::Build(
            blocksketch::BuildError::MissingSketch
        ))
    ));
}
