//! 识别结果编解码
//! 定长整型数组编解码（存储/传输用），以及基于其上的 MessagePack / JSON 封装
//!
//! 数组布局固定为 10 个整数：
//! `[系统类型, 系统主版本, 次版本, 构建号, 修订号, 浏览器类型, 浏览器主版本, 次版本, 构建号, 修订号]`

use rmp_serde::{Serializer, from_slice};
use serde::Serialize;
use tracing::debug;

use super::model::{
    ClientBrowser, ClientBrowserType, ClientKind, ClientSystem, ClientSystemType, UserClient,
    Version,
};
use crate::error::{UaClientError, UaResult};

/// 编码后数组长度
pub const ENCODED_LEN: usize = 10;

/// 移动设备相关的系统族
pub const MOBILE_SYSTEMS: [ClientSystemType; 10] = [
    ClientSystemType::Android,
    ClientSystemType::IPad,
    ClientSystemType::IPod,
    ClientSystemType::IPhone,
    ClientSystemType::WindowsMobile,
    ClientSystemType::WindowsPhone,
    ClientSystemType::Symbian,
    ClientSystemType::BlackBerry,
    ClientSystemType::J2ME,
    ClientSystemType::MTK,
];

/// 系统族是否属于移动设备
pub fn is_mobile_device(system: &ClientSystem) -> bool {
    MOBILE_SYSTEMS.contains(&system.kind)
}

fn version_from(parts: &[i32]) -> Version {
    Version::new(parts[0], parts[1], parts[2], parts[3])
}

impl UserClient {
    /// 编码为定长整型数组
    pub fn encode(&self) -> [i32; ENCODED_LEN] {
        let [s0, s1, s2, s3] = self.system.version.to_array();
        let [b0, b1, b2, b3] = self.browser.version.to_array();
        [
            self.system.kind.id(),
            s0,
            s1,
            s2,
            s3,
            self.browser.kind.id(),
            b0,
            b1,
            b2,
            b3,
        ]
    }

    /// 从定长整型数组解码，长度不为 10 时返回 None
    /// 未知类型编号解码为 Unknown，负数版本段钳制为 0
    pub fn decode(values: &[i32]) -> Option<Self> {
        if values.len() != ENCODED_LEN {
            return None;
        }

        let system = ClientSystem::new(
            ClientSystemType::from_id(values[0]).unwrap_or(ClientSystemType::UNKNOWN),
            version_from(&values[1..5]),
        );
        let browser = ClientBrowser::new(
            ClientBrowserType::from_id(values[5]).unwrap_or(ClientBrowserType::UNKNOWN),
            version_from(&values[6..10]),
        );

        Some(Self::new(system, browser))
    }

    /// 编码数组的 MessagePack 序列化
    pub fn to_packed(&self) -> UaResult<Vec<u8>> {
        let mut packed = Vec::new();
        self.encode()
            .serialize(&mut Serializer::new(&mut packed))
            .map_err(|e| UaClientError::MsgPackError(format!("序列化失败：{}", e)))?;

        debug!("UserClient packed into {} bytes", packed.len());
        Ok(packed)
    }

    /// 反序列化 MessagePack 字节；字节合法但数组长度不为 10 时返回 Ok(None)
    pub fn from_packed(bytes: &[u8]) -> UaResult<Option<Self>> {
        let values: Vec<i32> = from_slice(bytes)
            .map_err(|e| UaClientError::MsgPackError(format!("反序列化失败：{}", e)))?;
        Ok(Self::decode(&values))
    }

    /// 紧凑 JSON 输出
    pub fn to_json(&self) -> UaResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
