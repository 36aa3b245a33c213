//! 搜索栏状态

/// 搜索输入
#[derive(Debug, Default)]
pub struct SearchState {
    pub input: String,
}

impl SearchState {
    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }
}
