/// 모델 타일의 테두리/배경 스타일.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    pub border_color: &'static str,
    pub background_color: &'static str,
}

impl TileStyle {
    pub const ACTIVE: TileStyle = TileStyle {
        border_color: "#07ff01",
        background_color: "rgba(7, 255, 1, 0.05)",
    };
    pub const INACTIVE: TileStyle = TileStyle {
        border_color: "#e6e6e6",
        background_color: "transparent",
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    OutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for TileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileError::OutOfRange { index, len } => {
                write!(f, "타일 {index} 없음 (타일 {len}개)")
            }
        }
    }
}

impl std::error::Error for TileError {}

/// 상호 배타적인 모델 타일 선택 상태. 생성 직후부터 항상 정확히 하나가 활성이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTiles {
    len: usize,
    active: usize,
}

impl ModelTiles {
    /// 타일이 하나도 없으면 None. 기본 선택은 첫 번째 타일.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    /// 타일을 선택한다. 범위를 벗어나면 상태를 바꾸지 않는다.
    pub fn select(&mut self, index: usize) -> Result<(), TileError> {
        if index >= self.len {
            return Err(TileError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        Ok(())
    }

    pub fn style(&self, index: usize) -> TileStyle {
        if self.is_active(index) {
            TileStyle::ACTIVE
        } else {
            TileStyle::INACTIVE
        }
    }

    /// 각 타일의 활성 여부
    pub fn states(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.is_active(i))
    }

    /// 타일 요소 이름 (`carport-option-<k>`)
    pub fn target_name(index: usize) -> String {
        format!("carport-option-{index}")
    }
}
