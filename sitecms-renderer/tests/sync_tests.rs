//! End-to-end: an admin context editing through the editor crates while a
//! public context renders, synchronized only by the store's notification.

use sitecms_content::{default_faq, default_footer};
use sitecms_editor::{CollectionEditor, FooterEditor};
use sitecms_renderer::{CollectionRenderer, DocumentRenderer};
use sitecms_store::ContentStore;
use sitecms_types::{FaqItem, slots};

#[test]
fn editor_commit_reaches_public_renderer_without_reload() {
    let store = ContentStore::in_memory();

    // Public tab mounts first, before any content exists.
    let renderer =
        CollectionRenderer::<FaqItem>::mount(store.context(), slots::FAQ, default_faq())
            .unwrap();

    // Admin tab opens the editor; first run seeds the slot. Seeding is a
    // save, so the public tab picks it up too.
    let mut editor =
        CollectionEditor::open(store.context(), slots::FAQ, default_faq()).unwrap();

    let draft = editor.start_create().unwrap();
    draft.question = "Do you offer support plans?".to_string();
    draft.answer = "Yes, on every tier.".to_string();
    editor.commit().unwrap();

    let rendered = renderer.present(None);
    assert_eq!(rendered.len(), 6);
    assert_eq!(rendered[5].question, "Do you offer support plans?");
}

#[test]
fn editor_delete_and_reorder_reach_public_renderer() {
    let store = ContentStore::in_memory();
    let mut editor =
        CollectionEditor::open(store.context(), slots::FAQ, default_faq()).unwrap();
    let renderer =
        CollectionRenderer::<FaqItem>::mount(store.context(), slots::FAQ, vec![]).unwrap();

    editor.delete(1).unwrap();
    editor.move_up(1).unwrap();

    let rendered = renderer.present(None);
    let ids: Vec<u64> = rendered.iter().map(|f| f.id).collect();
    assert_eq!(ids, [3, 2, 4, 5]);
}

#[test]
fn footer_edits_reach_public_renderer() {
    let store = ContentStore::in_memory();
    let mut editor = FooterEditor::open(store.context(), default_footer()).unwrap();
    let renderer =
        DocumentRenderer::mount(store.context(), slots::FOOTER, default_footer()).unwrap();

    editor.set_copyright("© 2025 By Zoolyum. All Rights Reserved.").unwrap();
    editor.delete_section(5).unwrap();

    let doc = renderer.present();
    assert_eq!(doc.copyright, "© 2025 By Zoolyum. All Rights Reserved.");
    assert_eq!(doc.sections.len(), 4);
    assert!(doc.section(5).is_none());
}

#[test]
fn two_admin_contexts_last_write_wins() {
    // Two admin tabs edit concurrently; the store does not merge. The
    // public tab ends up with whichever tab saved last.
    let store = ContentStore::in_memory();
    let mut admin_a =
        CollectionEditor::open(store.context(), slots::FAQ, default_faq()).unwrap();
    let mut admin_b =
        CollectionEditor::open(store.context(), slots::FAQ, default_faq()).unwrap();
    let renderer =
        CollectionRenderer::<FaqItem>::mount(store.context(), slots::FAQ, vec![]).unwrap();

    admin_a.start_edit(1).unwrap();
    admin_a.draft_mut().unwrap().answer = "from tab A".to_string();
    admin_a.commit().unwrap();

    // Tab B opened before A's commit and still holds the old collection.
    admin_b.start_edit(1).unwrap();
    admin_b.draft_mut().unwrap().answer = "from tab B".to_string();
    admin_b.commit().unwrap();

    assert_eq!(renderer.present(None)[0].answer, "from tab B");
}
