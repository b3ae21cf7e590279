use std::ops::{Range, RangeInclusive};

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_WINDOW_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current_page: usize,
    page_size: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size).max(1)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn set(&mut self, page: usize, item_count: usize) {
        self.current_page = page.clamp(1, self.total_pages(item_count));
    }

    pub fn next(&mut self, item_count: usize) {
        self.set(self.current_page.saturating_add(1), item_count);
    }

    pub fn prev(&mut self, item_count: usize) {
        self.set(self.current_page.saturating_sub(1), item_count);
    }

    /// Re-clamps after the item count changed underneath the cursor.
    pub fn clamp(&mut self, item_count: usize) {
        self.set(self.current_page, item_count);
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Prev,
    Page,
    Ellipsis,
    Next,
}

/// One navigation control. `page` is the page the control leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub kind: ControlKind,
    pub page: Option<usize>,
    pub active: bool,
    pub disabled: bool,
}

impl PageControl {
    fn page(page: usize, current: usize) -> Self {
        Self {
            kind: ControlKind::Page,
            page: Some(page),
            active: page == current,
            disabled: false,
        }
    }

    fn ellipsis() -> Self {
        Self {
            kind: ControlKind::Ellipsis,
            page: None,
            active: false,
            disabled: true,
        }
    }
}

/// Where one page sits inside the filtered sequence, plus its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub range: Range<usize>,
    /// Sliding window of page numbers, anchors excluded.
    pub window: RangeInclusive<usize>,
    pub controls: Vec<PageControl>,
}

impl PageWindow {
    /// Every page number a control leads to, anchors included.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.controls
            .iter()
            .filter(|c| c.kind == ControlKind::Page)
            .filter_map(|c| c.page)
            .collect()
    }

    pub fn has_controls(&self) -> bool {
        !self.controls.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    window_width: usize,
}

impl Paginator {
    pub fn new(window_width: usize) -> Self {
        Self {
            window_width: window_width.max(1),
        }
    }

    /// Slices `item_count` items for `cursor`. The cursor is clamped in place first.
    pub fn paginate(&self, item_count: usize, cursor: &mut PageCursor) -> PageWindow {
        cursor.clamp(item_count);
        let current = cursor.current_page();
        let total = cursor.total_pages(item_count);
        let start = ((current - 1) * cursor.page_size()).min(item_count);
        let end = (start + cursor.page_size()).min(item_count);
        let window = self.window(current, total);

        PageWindow {
            current_page: current,
            total_pages: total,
            range: start..end,
            controls: self.controls(current, total, &window),
            window,
        }
    }

    fn window(&self, current: usize, total: usize) -> RangeInclusive<usize> {
        let width = self.window_width;
        let mut start = current.saturating_sub(width / 2).max(1);
        let end = (start + width - 1).min(total);
        if end - start + 1 < width {
            start = (end + 1).saturating_sub(width).max(1);
        }
        start..=end
    }

    fn controls(
        &self,
        current: usize,
        total: usize,
        window: &RangeInclusive<usize>,
    ) -> Vec<PageControl> {
        if total <= 1 {
            return Vec::new();
        }
        let (start, end) = (*window.start(), *window.end());

        let mut controls = vec![PageControl {
            kind: ControlKind::Prev,
            page: Some(current.saturating_sub(1).max(1)),
            active: false,
            disabled: current == 1,
        }];

        if start > 1 {
            controls.push(PageControl::page(1, current));
            if start > 2 {
                controls.push(PageControl::ellipsis());
            }
        }
        controls.extend((start..=end).map(|page| PageControl::page(page, current)));
        if end < total {
            if end < total - 1 {
                controls.push(PageControl::ellipsis());
            }
            controls.push(PageControl::page(total, current));
        }

        controls.push(PageControl {
            kind: ControlKind::Next,
            page: Some((current + 1).min(total)),
            active: false,
            disabled: current == total,
        });
        controls
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH)
    }
}
