use anyhow::Result;
use scribe_core::post::{FormatAction, PostDraft};

pub fn toolbar() {
    for action in FormatAction::toolbar() {
        println!("{}", action.label());
    }
}

pub fn draft(title: &str, tags: &[String]) -> Result<()> {
    let draft = build_draft(title, tags)?;
    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}

fn build_draft(title: &str, tags: &[String]) -> Result<PostDraft> {
    let mut draft = PostDraft::new();
    draft.set_title(title);
    for tag in tags {
        draft.add_tag(tag)?;
    }
    Ok(draft)
}
