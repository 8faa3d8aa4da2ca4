//! Guide line derivation and drawing
//!
//! Title, summary and cue lines subdivide the page independent of the
//! base pattern. Their positions come from percentages of the printable
//! area, snapped to the mesh; an index that lands on the relevant page
//! edge disables the guide rather than failing.

use crate::drawing::{self, PageSpace};
use crate::error::{Result, TemplateError};
use crate::mesh::Mesh;
use crate::template::PageTemplate;
use lopdf::content::Operation;

/// Percentage positions of the four guide lines, each in 0-100
///
/// Zero disables every guide: the title and cue indices land on the
/// top/left edge and the summary and right cue indices on the
/// bottom/right edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GuidePercents {
    /// Title rule, measured down from the top of the printable area
    pub title: f32,
    /// Summary rule, measured up from the bottom
    pub summary: f32,
    /// Left cue rule, measured in from the left
    pub cue_left: f32,
    /// Right cue rule, measured in from the right
    pub cue_right: f32,
}

impl GuidePercents {
    /// Create guide percentages with explicit values
    pub fn new(title: f32, summary: f32, cue_left: f32, cue_right: f32) -> Self {
        Self {
            title,
            summary,
            cue_left,
            cue_right,
        }
    }

    /// All guides disabled
    pub fn none() -> Self {
        Self::default()
    }

    /// A Cornell note-taking layout: title band, summary band and a
    /// narrow cue column on each side
    pub fn cornell() -> Self {
        Self::new(4.0, 15.0, 5.0, 5.0)
    }

    /// Check that every percentage is within 0-100
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("title", self.title),
            ("summary", self.summary),
            ("cue left", self.cue_left),
            ("cue right", self.cue_right),
        ];
        for (name, value) in fields {
            if !(0.0..=100.0).contains(&value) {
                return Err(TemplateError::ConfigError(format!(
                    "{name} percentage must be within 0-100, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Mesh indices of the guide lines derived from percentages
///
/// Row indices run 0 to the mesh row count, column indices 0 to the
/// column count. The accessors apply the disabled policy and return
/// None for a guide whose index landed on its page edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideIndices {
    title: usize,
    summary: usize,
    cue_left: usize,
    cue_right: usize,
    rows: usize,
    columns: usize,
}

impl GuideIndices {
    /// Derive the four indices from percentages and mesh dimensions
    pub fn derive(percents: &GuidePercents, mesh: &Mesh) -> Self {
        let rows = mesh.rows;
        let columns = mesh.columns;
        let row_index = |percent: f32| (percent * rows as f32 / 100.0).floor() as usize;
        let column_index = |percent: f32| (percent * columns as f32 / 100.0).floor() as usize;

        Self {
            title: row_index(percents.title),
            summary: rows - row_index(percents.summary),
            cue_left: column_index(percents.cue_left),
            cue_right: columns - column_index(percents.cue_right),
            rows,
            columns,
        }
    }

    /// Mesh row of the title line, or None when disabled
    pub fn title(&self) -> Option<usize> {
        (self.title != 0).then_some(self.title)
    }

    /// Mesh row of the summary line, or None when disabled
    pub fn summary(&self) -> Option<usize> {
        (self.summary != self.rows).then_some(self.summary)
    }

    /// Mesh column of the left cue line, or None when disabled
    pub fn cue_left(&self) -> Option<usize> {
        cue_column(self.cue_left, self.columns)
    }

    /// Mesh column of the right cue line, or None when disabled
    pub fn cue_right(&self) -> Option<usize> {
        cue_column(self.cue_right, self.columns)
    }
}

/// Cue lines are suppressed on both page edges
fn cue_column(index: usize, columns: usize) -> Option<usize> {
    (index != 0 && index != columns).then_some(index)
}

/// Resolved guide line geometry in millimetres
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLayout {
    /// Vertical position of the title line, when drawn
    pub title_y: Option<f32>,
    /// Vertical position of the summary line, when drawn
    pub summary_y: Option<f32>,
    /// Horizontal position of the left cue line, when drawn
    pub cue_left_x: Option<f32>,
    /// Horizontal position of the right cue line, when drawn
    pub cue_right_x: Option<f32>,
    /// Upper bound of the cue line span
    pub cue_top: f32,
    /// Lower bound of the cue line span
    pub cue_bottom: f32,
    /// Left end of the title and summary lines
    pub left: f32,
    /// Right end of the title and summary lines
    pub right: f32,
}

impl GuideLayout {
    /// Resolve indices against the mesh
    ///
    /// A drawn title or summary pushes the cue span inward by half a
    /// stroke width so the rules do not overlap; a disabled one leaves
    /// the span at the printable edge.
    pub fn resolve(indices: &GuideIndices, mesh: &Mesh, guide_line_width: f32) -> Self {
        let title_y = indices.title().map(|i| mesh.ys[i]);
        let summary_y = indices.summary().map(|i| mesh.ys[i]);
        let cue_left_x = indices.cue_left().map(|i| mesh.xs[i]);
        let cue_right_x = indices.cue_right().map(|i| mesh.xs[i]);

        let half_stroke = guide_line_width / 2.0;
        let cue_top = title_y.map_or(mesh.top(), |y| y + half_stroke);
        let cue_bottom = summary_y.map_or(mesh.bottom(), |y| y - half_stroke);

        Self {
            title_y,
            summary_y,
            cue_left_x,
            cue_right_x,
            cue_top,
            cue_bottom,
            left: mesh.left(),
            right: mesh.right(),
        }
    }

    /// Whether any guide line will be drawn
    pub fn any_active(&self) -> bool {
        self.title_y.is_some()
            || self.summary_y.is_some()
            || self.cue_left_x.is_some()
            || self.cue_right_x.is_some()
    }
}

/// Generate the drawing operations for the active guide lines
pub fn generate_guide_operations(template: &PageTemplate, layout: &GuideLayout) -> Vec<Operation> {
    if !layout.any_active() {
        return Vec::new();
    }

    let space = PageSpace::new(template.paper_height);
    let mut ops = vec![drawing::save_state()];
    ops.extend(drawing::set_stroke_style(
        template.line_color,
        template.guide_line_width,
    ));

    if let Some(y) = layout.title_y {
        ops.extend(drawing::horizontal_line(&space, layout.left, layout.right, y));
    }
    if let Some(y) = layout.summary_y {
        ops.extend(drawing::horizontal_line(&space, layout.left, layout.right, y));
    }
    if let Some(x) = layout.cue_left_x {
        ops.extend(drawing::vertical_line(
            &space,
            x,
            layout.cue_top,
            layout.cue_bottom,
        ));
    }
    if let Some(x) = layout.cue_right_x {
        ops.extend(drawing::vertical_line(
            &space,
            x,
            layout.cue_top,
            layout.cue_bottom,
        ));
    }

    ops.push(drawing::restore_state());
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4_mesh() -> Mesh {
        Mesh::build(210.0, 297.0, 5.0, 0.0, 0.0)
    }

    #[test]
    fn test_percent_validation() {
        assert!(GuidePercents::new(0.0, 100.0, 50.0, 4.5).validate().is_ok());
        assert!(GuidePercents::new(-1.0, 0.0, 0.0, 0.0).validate().is_err());
        assert!(GuidePercents::new(0.0, 101.0, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_cornell_indices_on_a4() {
        let mesh = a4_mesh();
        let indices = GuideIndices::derive(&GuidePercents::cornell(), &mesh);

        // 59 rows, 42 columns
        assert_eq!(indices.title(), Some(2));
        assert_eq!(indices.summary(), Some(51));
        assert_eq!(indices.cue_left(), Some(2));
        assert_eq!(indices.cue_right(), Some(40));
    }

    #[test]
    fn test_zero_percent_disables_guides() {
        let mesh = a4_mesh();
        let indices = GuideIndices::derive(&GuidePercents::none(), &mesh);

        assert_eq!(indices.title(), None);
        assert_eq!(indices.summary(), None);
        assert_eq!(indices.cue_left(), None);
        assert_eq!(indices.cue_right(), None);
    }

    #[test]
    fn test_full_percent_title_is_drawn() {
        let mesh = a4_mesh();
        let indices =
            GuideIndices::derive(&GuidePercents::new(100.0, 100.0, 100.0, 100.0), &mesh);

        // A full-height title lands on the last mesh row and stays active;
        // a full-height summary lands on row zero likewise. Cues at either
        // edge are suppressed.
        assert_eq!(indices.title(), Some(59));
        assert_eq!(indices.summary(), Some(0));
        assert_eq!(indices.cue_left(), None);
        assert_eq!(indices.cue_right(), None);
    }

    #[test]
    fn test_resolve_cornell_geometry() {
        let mesh = a4_mesh();
        let indices = GuideIndices::derive(&GuidePercents::cornell(), &mesh);
        let layout = GuideLayout::resolve(&indices, &mesh, 0.25);

        assert_eq!(layout.title_y, Some(10.0));
        assert_eq!(layout.summary_y, Some(255.0));
        assert_eq!(layout.cue_left_x, Some(10.0));
        assert_eq!(layout.cue_right_x, Some(200.0));
        assert_eq!(layout.cue_top, 10.125);
        assert_eq!(layout.cue_bottom, 254.875);
    }

    #[test]
    fn test_disabled_guides_leave_span_at_printable_edges() {
        let mesh = Mesh::build(190.0, 277.0, 5.0, 10.0, 10.0);
        let indices = GuideIndices::derive(&GuidePercents::none(), &mesh);
        let layout = GuideLayout::resolve(&indices, &mesh, 0.25);

        assert_eq!(layout.cue_top, 10.0);
        assert_eq!(layout.cue_bottom, 287.0);
        assert_eq!(layout.left, 10.0);
        assert_eq!(layout.right, 200.0);
        assert!(!layout.any_active());
    }

    #[test]
    fn test_guide_operations_count() {
        let template = PageTemplate::a4().with_guides(GuidePercents::cornell());
        let mesh = a4_mesh();
        let indices = GuideIndices::derive(&template.guides, &mesh);
        let layout = GuideLayout::resolve(&indices, &mesh, template.guide_line_width);
        let ops = generate_guide_operations(&template, &layout);

        let strokes = ops.iter().filter(|op| op.operator == "S").count();
        assert_eq!(strokes, 4);
    }

    #[test]
    fn test_no_guides_generates_no_operations() {
        let template = PageTemplate::a4();
        let mesh = a4_mesh();
        let indices = GuideIndices::derive(&template.guides, &mesh);
        let layout = GuideLayout::resolve(&indices, &mesh, template.guide_line_width);

        assert!(generate_guide_operations(&template, &layout).is_empty());
    }
}
