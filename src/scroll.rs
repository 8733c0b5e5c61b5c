//! 스크롤 관련 화면 상태 판단. DOM 조작 없이 판단 로직만 담는다.

/// 이 오프셋을 넘으면 내비게이션 바에 `scrolled` 스타일을 준다 [px]
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
/// 이 오프셋을 넘으면 맨 위로 버튼을 보인다 [px]
pub const SCROLL_TO_TOP_AFTER: f64 = 300.0;
/// 고정 헤더 높이만큼 앵커 이동 위치를 올린다 [px]
pub const ANCHOR_OFFSET: f64 = 80.0;
/// 섹션 시작 전 이 거리부터 메뉴를 활성화한다 [px]
pub const SECTION_ACTIVATION_MARGIN: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

impl ScrollDirection {
    /// 활성 메뉴 밑줄이 시작되는 쪽의 클래스
    pub fn underline_class(&self) -> &'static str {
        match self {
            ScrollDirection::Down => "direction-left",
            ScrollDirection::Up => "direction-right",
        }
    }
}

/// 마지막 스크롤 위치와 방향을 보관한다. 페이지마다 하나만 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
    direction: ScrollDirection,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            last_offset: 0.0,
            direction: ScrollDirection::Down,
        }
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// 새 스크롤 위치를 반영한다. 방향이 바뀐 경우에만 새 방향을 돌려준다.
    /// 음수 위치(바운스 스크롤)는 0으로 저장한다.
    pub fn update(&mut self, offset: f64) -> Option<ScrollDirection> {
        let direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_offset = offset.max(0.0);
        if direction == self.direction {
            return None;
        }
        self.direction = direction;
        Some(direction)
    }
}

pub fn navbar_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLLED_AFTER
}

pub fn scroll_to_top_visible(offset: f64) -> bool {
    offset > SCROLL_TO_TOP_AFTER
}

/// 뷰포트 기준 요소 경계 [px]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// 요소 전체가 뷰포트 안에 들어왔는지. 등장 애니메이션(`visible` 클래스) 판단에 쓴다.
pub fn fully_in_viewport(rect: &ElementRect, viewport_width: f64, viewport_height: f64) -> bool {
    rect.top >= 0.0
        && rect.left >= 0.0
        && rect.bottom <= viewport_height
        && rect.right <= viewport_width
}

/// 요소가 세로로 조금이라도 보이는지. 소개 영상 재생/정지 판단에 쓴다.
pub fn partly_in_viewport(rect: &ElementRect, viewport_height: f64) -> bool {
    rect.top <= viewport_height && rect.bottom >= 0.0
}

pub fn anchor_scroll_target(section_top: f64) -> f64 {
    section_top - ANCHOR_OFFSET
}

/// 현재 위치에서 활성화할 섹션 id. 조건을 만족하는 마지막 섹션을 고른다.
pub fn active_section<'a>(offset: f64, sections: &[(&'a str, f64)]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| offset >= top - SECTION_ACTIVATION_MARGIN)
        .map(|(id, _)| *id)
        .last()
}

/// 마우스가 링크의 어느 쪽에서 들어왔는지로 밑줄 시작 방향을 정한다.
pub fn hover_direction(mouse_x: f64, link_left: f64, link_width: f64) -> &'static str {
    if mouse_x < link_left + link_width / 2.0 {
        "direction-left"
    } else {
        "direction-right"
    }
}
