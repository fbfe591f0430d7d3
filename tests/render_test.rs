//! Tests for element rendering

use tagtree::ElementBuilder;

#[test]
fn given_ul_with_two_items_when_rendering_then_matches_expected_output() {
    // Arrange
    let mut builder = ElementBuilder::new("ul").unwrap();
    builder.add_child("li", "hello").add_child("li", "world");

    // Act
    let rendered = builder.render().unwrap();

    // Assert
    let expected = "\
<ul>
  <li>
    hello
  </li>
  <li>
    world
  </li>
</ul>
";
    assert_eq!(rendered, expected);
}

#[test]
fn given_childless_element_when_rendering_then_emits_only_tag_pair() {
    let builder = ElementBuilder::new("div").unwrap();
    assert_eq!(builder.render().unwrap(), "<div>\n</div>\n");
}

#[test]
fn given_child_with_empty_text_when_rendering_then_emits_no_text_line() {
    // Arrange
    let mut builder = ElementBuilder::new("ul").unwrap();
    builder.add_child("li", "");

    // Act
    let rendered = builder.render().unwrap();

    // Assert
    assert_eq!(rendered, "<ul>\n  <li>\n  </li>\n</ul>\n");
}

#[test]
fn given_unmodified_element_when_rendering_twice_then_output_is_identical() {
    let mut builder = ElementBuilder::new("ul").unwrap();
    builder.add_child("li", "a").add_child("li", "b");
    let element = builder.build().unwrap();

    assert_eq!(element.render(), element.render());
}

#[test]
fn given_n_children_when_rendering_then_child_open_tags_match_call_count() {
    // Arrange
    let n = 7;
    let mut builder = ElementBuilder::new("ul").unwrap();
    for i in 0..n {
        builder.add_child("li", format!("item {i}"));
    }

    // Act
    let rendered = builder.render().unwrap();

    // Assert
    let child_open_tags = rendered.lines().filter(|l| *l == "  <li>").count();
    assert_eq!(child_open_tags, n);
}

#[test]
fn given_indent_offset_when_rendering_then_whole_tree_is_shifted() {
    // Arrange
    let mut builder = ElementBuilder::new("li").unwrap();
    builder.add_child("em", "x");
    let element = builder.build().unwrap();

    // Act
    let rendered = element.render_indented(1);

    // Assert
    assert_eq!(rendered, "  <li>\n    <em>\n      x\n    </em>\n  </li>\n");
}

#[test]
fn given_text_with_markup_characters_when_rendering_then_text_is_escaped() {
    // Arrange
    let mut builder = ElementBuilder::new("p").unwrap();
    builder.add_child("code", "a < b && b > c");

    // Act
    let rendered = builder.render().unwrap();

    // Assert
    assert!(rendered.contains("a &lt; b &amp;&amp; b &gt; c"));
    // Stored text stays raw
    assert_eq!(builder.build().unwrap().children()[0].text(), "a < b && b > c");
}

#[test]
fn given_element_when_formatting_with_display_then_output_equals_render() {
    let mut builder = ElementBuilder::new("ul").unwrap();
    builder.add_child("li", "hello");
    let element = builder.build().unwrap();

    assert_eq!(format!("{element}"), element.render());
}
