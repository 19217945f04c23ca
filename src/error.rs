//! 全局错误类型定义
//! 核心检测/编解码接口不返回错误，以下错误仅用于编译、打包与字符串解析等外围接口

use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UaClientError {
    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type UaResult<T> = Result<T, UaClientError>;
