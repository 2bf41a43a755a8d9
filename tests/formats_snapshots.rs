//! Output of the tree formats for a representative comment

use doccomment::comments::formats::{serialize_ast_tag, to_json_string, to_treeviz_str, FormatRegistry};
use doccomment::comments::parsing::parse_comment;
use serde_json::Value;

const SOURCE: &str = "\\brief Copies a buffer.\n\\param [in] src Source buffer.\n\\returns Zero.";

#[test]
fn test_treeviz_snapshot() {
    let comment = parse_comment(SOURCE);

    insta::assert_snapshot!(to_treeviz_str(&comment), @r###"
    ⧉ FullComment (3 blocks)
    ├─ § \brief
    │ └─ ¶  Copies a buffer.
    │   └─ ◦ " Copies a buffer."
    ├─ ≔ \param [in] src
    │ └─ ¶  Source buffer.
    │   └─ ◦ " Source buffer."
    └─ § \returns
      └─ ¶  Zero.
        └─ ◦ " Zero."
    "###);
}

#[test]
fn test_tag_snapshot() {
    let comment = parse_comment(SOURCE);

    insta::assert_snapshot!(serialize_ast_tag(&comment), @r###"
    <comment>
      <block-command name="brief">
        <paragraph>
          <text newline="true"> Copies a buffer.</text>
        </paragraph>
      </block-command>
      <param-command name="param" direction="in" explicit="true" param-name="src">
        <paragraph>
          <text newline="true"> Source buffer.</text>
        </paragraph>
      </param-command>
      <block-command name="returns">
        <paragraph>
          <text> Zero.</text>
        </paragraph>
      </block-command>
    </comment>
    "###);
}

#[test]
fn test_tag_verbatim_and_html() {
    let comment = parse_comment("<b>x</b>\n\\code\nint y;\n\\endcode");

    insta::assert_snapshot!(serialize_ast_tag(&comment), @r###"
    <comment>
      <paragraph>
        <html-start-tag name="b" self-closing="false"/>
        <text>x</text>
        <html-end-tag name="b" newline="true"/>
      </paragraph>
      <verbatim-block name="code" closed="true">
        <line>int y;</line>
      </verbatim-block>
    </comment>
    "###);
}

#[test]
fn test_json_shape() {
    let comment = parse_comment(SOURCE);
    let json: Value = serde_json::from_str(&to_json_string(&comment).unwrap()).unwrap();

    let blocks = json["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0]["type"], "block-command");
    assert_eq!(blocks[1]["type"], "param-command");
    assert_eq!(blocks[1]["direction"], "in");
    assert_eq!(blocks[1]["direction_explicit"], true);
    assert_eq!(blocks[1]["param_name"]["text"], "src");
    assert_eq!(blocks[2]["paragraph"]["content"][0]["text"], " Zero.");
}

#[test]
fn test_registry_formats_agree_with_direct_calls() {
    let comment = parse_comment(SOURCE);
    let registry = FormatRegistry::with_defaults();

    assert_eq!(
        registry.serialize(&comment, "treeviz").unwrap(),
        to_treeviz_str(&comment)
    );
    assert_eq!(
        registry.serialize(&comment, "tag").unwrap(),
        serialize_ast_tag(&comment)
    );
    assert!(registry.serialize(&comment, "html").is_err());
}
