//! The footer document editor.
//!
//! The footer is one aggregate (sections, each owning links, plus social
//! URLs and a copyright line) persisted as a unit to the `"footerData"`
//! slot. Section ids are unique among sections; link ids are unique across
//! the whole document. Every mutation persists the full document before
//! returning.

use crate::error::{EditorError, EditorResult};
use crate::notice::Notice;
use sitecms_store::{Loaded, StoreContext};
use sitecms_types::{FooterDocument, FooterLink, FooterSection, IdAllocator, SocialPlatform, slots};

/// Admin-side editor for the footer document.
pub struct FooterEditor {
    ctx: StoreContext,
    doc: FooterDocument,
    section_ids: IdAllocator,
    link_ids: IdAllocator,
}

impl FooterEditor {
    /// Opens the footer editor.
    ///
    /// If the `"footerData"` slot has never been written the seed document
    /// is adopted and persisted immediately. A malformed slot is a hard
    /// error; the payload is left untouched.
    pub fn open(ctx: StoreContext, seed: FooterDocument) -> EditorResult<Self> {
        let doc = match ctx.load::<FooterDocument>(slots::FOOTER)? {
            Loaded::Value(doc) => doc,
            Loaded::Absent => {
                ctx.save(slots::FOOTER, &seed)?;
                tracing::debug!(sections = seed.sections.len(), "seeded empty footer slot");
                seed
            }
        };
        let section_ids = IdAllocator::seeded(doc.sections.iter().map(|s| s.id));
        let link_ids = IdAllocator::seeded(doc.link_ids());
        Ok(Self {
            ctx,
            doc,
            section_ids,
            link_ids,
        })
    }

    /// The current footer document.
    pub fn document(&self) -> &FooterDocument {
        &self.doc
    }

    fn persist(&mut self, updated: FooterDocument) -> EditorResult<()> {
        self.ctx.save(slots::FOOTER, &updated)?;
        self.doc = updated;
        Ok(())
    }

    // ── Sections ─────────────────────────────────────────────────

    /// Appends a new empty section and persists. Returns the new section's
    /// id so the host can select it for editing.
    pub fn add_section(&mut self) -> EditorResult<(u64, Notice)> {
        let id = self.section_ids.next();
        let mut updated = self.doc.clone();
        updated.sections.push(FooterSection {
            id,
            title: "NEW SECTION".to_string(),
            links: Vec::new(),
        });
        self.persist(updated)?;
        Ok((id, Notice::success("The section has been added")))
    }

    /// Renames a section and persists.
    pub fn rename_section(&mut self, id: u64, title: impl Into<String>) -> EditorResult<Notice> {
        let mut updated = self.doc.clone();
        let section = updated.section_mut(id).ok_or(EditorError::NotFound(id))?;
        section.title = title.into();
        self.persist(updated)?;
        Ok(Notice::success("The section title has been updated"))
    }

    /// Removes a section, discarding the links it owns, and persists.
    pub fn delete_section(&mut self, id: u64) -> EditorResult<Notice> {
        if self.doc.section(id).is_none() {
            return Err(EditorError::NotFound(id));
        }
        let mut updated = self.doc.clone();
        updated.sections.retain(|s| s.id != id);
        self.persist(updated)?;
        Ok(Notice::success("The section has been removed"))
    }

    // ── Links ────────────────────────────────────────────────────

    /// Appends a placeholder link to a section and persists. The link id
    /// is unique across the whole document, not just the section.
    pub fn add_link(&mut self, section_id: u64) -> EditorResult<(u64, Notice)> {
        if self.doc.section(section_id).is_none() {
            return Err(EditorError::NotFound(section_id));
        }
        let id = self.link_ids.next();
        let mut updated = self.doc.clone();
        if let Some(section) = updated.section_mut(section_id) {
            section.links.push(FooterLink {
                id,
                title: "New Link".to_string(),
                url: "/".to_string(),
                is_external: false,
            });
        }
        self.persist(updated)?;
        Ok((id, Notice::success("The link has been added")))
    }

    /// Replaces a link (matched by its id) within a section and persists.
    pub fn update_link(&mut self, section_id: u64, link: FooterLink) -> EditorResult<Notice> {
        let mut updated = self.doc.clone();
        let section = updated
            .section_mut(section_id)
            .ok_or(EditorError::NotFound(section_id))?;
        let existing = section
            .links
            .iter_mut()
            .find(|l| l.id == link.id)
            .ok_or(EditorError::NotFound(link.id))?;
        *existing = link;
        self.persist(updated)?;
        Ok(Notice::success("The link has been updated"))
    }

    /// Removes a link from a section and persists. Other sections are
    /// untouched.
    pub fn delete_link(&mut self, section_id: u64, link_id: u64) -> EditorResult<Notice> {
        let mut updated = self.doc.clone();
        let section = updated
            .section_mut(section_id)
            .ok_or(EditorError::NotFound(section_id))?;
        if !section.links.iter().any(|l| l.id == link_id) {
            return Err(EditorError::NotFound(link_id));
        }
        section.links.retain(|l| l.id != link_id);
        self.persist(updated)?;
        Ok(Notice::success("The link has been removed"))
    }

    // ── Social links & copyright ─────────────────────────────────

    /// Sets one social platform URL and persists. An empty URL hides the
    /// platform's icon on the public site.
    pub fn set_social(
        &mut self,
        platform: SocialPlatform,
        url: impl Into<String>,
    ) -> EditorResult<Notice> {
        let mut updated = self.doc.clone();
        updated.social_links.set(platform, url);
        self.persist(updated)?;
        Ok(Notice::success(format!("The {platform} link has been updated")))
    }

    /// Sets the copyright line and persists.
    pub fn set_copyright(&mut self, text: impl Into<String>) -> EditorResult<Notice> {
        let mut updated = self.doc.clone();
        updated.copyright = text.into();
        self.persist(updated)?;
        Ok(Notice::success("The copyright text has been updated"))
    }
}
