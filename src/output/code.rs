//! Generates C++ that exposes the node sizes as `std::integral_constant` templates.
//!
//! For every container a `detail::<name>_node_size<Alignment>` template is specialized once per
//! measured alignment, and `<name>_node_size<T>` adds `sizeof(T)` to the entry for `alignof(T)`.

use super::Serializer;
use crate::types::MeasurementResult;

/// Indentation of one nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indent {
    Tab,
    Spaces(u8),
}

impl Indent {
    /// 0 selects a tab character, anything else that many spaces.
    pub fn from_tab_width(tab_width: u8) -> Self {
        if tab_width == 0 { Indent::Tab } else { Indent::Spaces(tab_width) }
    }

    pub fn as_string(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(usize::from(*n)),
        }
    }
}

pub struct CodeSerializer {
    tab: String,
    generator: String,
}

impl CodeSerializer {
    pub fn new(indent: Indent, generator: &str) -> Self {
        Self { tab: indent.as_string(), generator: generator.to_string() }
    }

    fn struct_name(container_name: &str) -> String {
        format!("{}_node_size", container_name)
    }
}

impl Serializer for CodeSerializer {
    fn prefix(&mut self, out: &mut String) {
        out.push_str(&format!("// The following section was autogenerated by {}\n", self.generator));
        out.push_str("//=== BEGIN AUTOGENERATED SECTION ===//\n\n");
    }

    fn emit(&mut self, out: &mut String, result: &MeasurementResult) {
        let tab = &self.tab;
        let name = Self::struct_name(result.container_name);

        out.push_str("namespace detail\n{\n");
        out.push_str(&format!("{tab}template <std::size_t Alignment>\n"));
        out.push_str(&format!("{tab}struct {name};\n"));

        for entry in &result.node_sizes {
            out.push('\n');
            out.push_str(&format!("{tab}template <>\n"));
            out.push_str(&format!("{tab}struct {name}<{}>\n", entry.alignment));
            out.push_str(&format!(
                "{tab}: std::integral_constant<std::size_t, {}>\n",
                entry.base_node_size
            ));
            out.push_str(&format!("{tab}{{}};\n"));
        }

        out.push_str("} // namespace detail\n\n");
        out.push_str("template <typename T>\n");
        out.push_str(&format!("struct {name}\n"));
        out.push_str(": std::integral_constant<std::size_t,\n");
        out.push_str(&format!("       detail::{name}<alignof(T)>::value + sizeof(T)>\n"));
        out.push_str("{};\n\n");
    }

    fn suffix(&mut self, out: &mut String) {
        out.push_str("//=== END AUTOGENERATED SECTION ===//\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::serialize;

    fn list_result() -> MeasurementResult {
        MeasurementResult::new("list").with_entry(4, 12).with_entry(8, 16)
    }

    #[test]
    fn test_indent_from_tab_width() {
        assert_eq!(Indent::from_tab_width(0), Indent::Tab);
        assert_eq!(Indent::from_tab_width(2).as_string(), "  ");
        assert_eq!(Indent::from_tab_width(9).as_string(), " ".repeat(9));
    }

    #[test]
    fn test_list_with_two_alignments() {
        let mut serializer = CodeSerializer::new(Indent::Spaces(4), "gen");
        let out = serialize(&mut serializer, &[list_result()]);

        let expected = "\
// The following section was autogenerated by gen
//=== BEGIN AUTOGENERATED SECTION ===//

namespace detail
{
    template <std::size_t Alignment>
    struct list_node_size;

    template <>
    struct list_node_size<4>
    : std::integral_constant<std::size_t, 12>
    {};

    template <>
    struct list_node_size<8>
    : std::integral_constant<std::size_t, 16>
    {};
} // namespace detail

template <typename T>
struct list_node_size
: std::integral_constant<std::size_t,
       detail::list_node_size<alignof(T)>::value + sizeof(T)>
{};

//=== END AUTOGENERATED SECTION ===//
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_tab_indent() {
        let mut serializer = CodeSerializer::new(Indent::Tab, "gen");
        let out = serialize(&mut serializer, &[list_result()]);
        assert!(out.contains("\n\ttemplate <std::size_t Alignment>\n"));
        assert!(out.contains("\n\tstruct list_node_size<8>\n"));
        assert!(!out.contains("    template"));
    }

    #[test]
    fn test_two_space_indent() {
        let mut serializer = CodeSerializer::new(Indent::Spaces(2), "gen");
        let out = serialize(&mut serializer, &[list_result()]);
        assert!(out.contains("\n  template <>\n"));
        assert!(!out.contains("\n   template"));
    }

    #[test]
    fn test_one_block_per_container() {
        let results = vec![list_result(), MeasurementResult::new("set").with_entry(8, 32)];
        let mut serializer = CodeSerializer::new(Indent::Tab, "gen");
        let out = serialize(&mut serializer, &results);
        assert_eq!(out.matches("namespace detail\n{").count(), 2);
        assert_eq!(out.matches("BEGIN AUTOGENERATED").count(), 1);
        assert_eq!(out.matches("END AUTOGENERATED").count(), 1);
        assert!(out.contains("struct set_node_size<8>\n\t: std::integral_constant<std::size_t, 32>"));
    }
}
