//! C/C++ header generation from a [`Catalog`].
//!
//! For every group the header carries a plain-C `typedef enum`, and behind
//! `#ifdef __cplusplus` an `enum class` with an extra `unknown` enumerator
//! plus an inline `conv_enum` mapping the former onto the latter.

use super::catalog::{Catalog, EnumGroup};
use super::conversion::ConversionTable;
use super::naming::{Naming, UNKNOWN_MEMBER};
use crate::error::Result;
use std::io::Write;
use tracing::{debug, trace};

const INDENT: &str = "    ";

/// Header lines for the whole catalog, without line terminators.
///
/// Lines are produced group by group as the iterator is driven; the same
/// catalog always yields the same lines.
pub fn generate(catalog: &Catalog) -> impl Iterator<Item = String> + '_ {
    debug!(groups = catalog.len(), "Generating enum header");
    let naming = catalog.naming();
    ["#pragma once", ""]
        .into_iter()
        .map(String::from)
        .chain(
            catalog
                .iter()
                .flat_map(move |group| render_group(naming, group)),
        )
}

/// Writes each line followed by `\n` and returns the number of bytes written.
pub fn write_lines<I, W>(lines: I, writer: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = String>,
    W: Write + ?Sized,
{
    let mut written = 0;
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        written += line.len() + 1;
    }
    writer.flush()?;
    Ok(written)
}

/// The complete header as one string.
pub fn render(catalog: &Catalog) -> String {
    let mut output = String::new();
    for line in generate(catalog) {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn render_group(naming: &Naming, group: &EnumGroup) -> Vec<String> {
    trace!(group = %group.name(), members = group.len(), "Rendering enum group");
    let table = ConversionTable::new(naming, group);
    let plain = table.plain_type();
    let rich = table.rich_type();

    let mut lines = Vec::with_capacity(group.len() * 4 + 20);

    lines.push(format!("typedef enum {plain} {{"));
    for constant in table.plain_constants() {
        lines.push(format!("{INDENT}{constant},"));
    }
    lines.push(format!("}} {plain};"));
    lines.push(String::new());

    lines.push("#ifdef __cplusplus".to_string());
    lines.push(format!("namespace {} {{", naming.namespace()));
    lines.push(String::new());

    lines.push(format!("enum class {rich} {{"));
    for member in table.rich_members() {
        lines.push(format!("{INDENT}{member},"));
    }
    lines.push(format!("{INDENT}{UNKNOWN_MEMBER},"));
    lines.push("};".to_string());
    lines.push(String::new());

    lines.push(format!("inline {rich} conv_enum(const {plain} e) {{"));
    lines.push(format!("{INDENT}switch (e) {{"));
    for (constant, member) in table.cases() {
        lines.push(format!("{INDENT}{INDENT}case {constant}:"));
        lines.push(format!("{INDENT}{INDENT}{INDENT}return {rich}::{member};"));
    }
    lines.push(format!("{INDENT}{INDENT}default:"));
    lines.push(format!(
        "{INDENT}{INDENT}{INDENT}return {rich}::{UNKNOWN_MEMBER};"
    ));
    lines.push(format!("{INDENT}}}"));
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("}".to_string());
    lines.push("#endif".to_string());
    lines.push(String::new());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumgen::{BuiltinCatalog, CatalogSource};
    use pretty_assertions::assert_eq;

    fn mouse_btn_catalog() -> Catalog {
        Catalog::new(
            "sung",
            vec![EnumGroup::new("mouse btn", ["left", "right", "middle", "eoe"]).unwrap()],
        )
        .unwrap()
    }

    const MOUSE_BTN_HEADER: &str = "\
#pragma once

typedef enum SungMouseBtn {
    SUNG_MOUSE_BTN_LEFT,
    SUNG_MOUSE_BTN_RIGHT,
    SUNG_MOUSE_BTN_MIDDLE,
    SUNG_MOUSE_BTN_EOE,
} SungMouseBtn;

#ifdef __cplusplus
namespace sung {

enum class MouseBtn {
    left,
    right,
    middle,
    eoe,
    unknown,
};

inline MouseBtn conv_enum(const SungMouseBtn e) {
    switch (e) {
        case SUNG_MOUSE_BTN_LEFT:
            return MouseBtn::left;
        case SUNG_MOUSE_BTN_RIGHT:
            return MouseBtn::right;
        case SUNG_MOUSE_BTN_MIDDLE:
            return MouseBtn::middle;
        case SUNG_MOUSE_BTN_EOE:
            return MouseBtn::eoe;
        default:
            return MouseBtn::unknown;
    }
}

}
#endif

";

    #[test]
    fn test_render_mouse_btn() {
        assert_eq!(render(&mouse_btn_catalog()), MOUSE_BTN_HEADER);
    }

    #[test]
    fn test_pragma_once_emitted_once() {
        let catalog = BuiltinCatalog.load().unwrap();
        let lines: Vec<String> = generate(&catalog).collect();
        assert_eq!(lines[0], "#pragma once");
        assert_eq!(lines[1], "");
        assert_eq!(lines.iter().filter(|l| *l == "#pragma once").count(), 1);
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("typedef enum ")).count(),
            3
        );
    }

    #[test]
    fn test_empty_catalog_is_just_the_guard() {
        let catalog = Catalog::new("sung", Vec::new()).unwrap();
        assert_eq!(render(&catalog), "#pragma once\n\n");
    }

    #[test]
    fn test_groups_emitted_in_catalog_order() {
        let catalog = Catalog::new(
            "sung",
            vec![
                EnumGroup::new("zoom", ["eoe"]).unwrap(),
                EnumGroup::new("axis", ["x", "y", "eoe"]).unwrap(),
            ],
        )
        .unwrap();
        let typedefs: Vec<String> = generate(&catalog)
            .filter(|line| line.starts_with("typedef enum "))
            .collect();
        assert_eq!(
            typedefs,
            vec!["typedef enum SungZoom {", "typedef enum SungAxis {"]
        );
    }

    #[test]
    fn test_custom_namespace() {
        let catalog = Catalog::new(
            "acme",
            vec![EnumGroup::new("axis", ["x", "eoe"]).unwrap()],
        )
        .unwrap();
        let header = render(&catalog);
        assert!(header.contains("typedef enum AcmeAxis {"));
        assert!(header.contains("    ACME_AXIS_X,"));
        assert!(header.contains("namespace acme {"));
        assert!(header.contains("inline Axis conv_enum(const AcmeAxis e) {"));
    }

    #[test]
    fn test_write_lines_counts_bytes() {
        let mut buffer = Vec::new();
        let written = write_lines(generate(&mouse_btn_catalog()), &mut buffer).unwrap();
        assert_eq!(written, buffer.len());
        assert_eq!(String::from_utf8(buffer).unwrap(), MOUSE_BTN_HEADER);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let catalog = BuiltinCatalog.load().unwrap();
        assert_eq!(render(&catalog), render(&catalog));
    }
}
