/// System message sent with every connectivity probe
pub const TEST_SYSTEM_PROMPT: &str = "你是一个有用的AI助手。";

/// User greeting sent with every connectivity probe
pub const TEST_USER_PROMPT: &str = "你好，这是一个连接测试。";

/// Sampling temperature for the probe request, kept low so replies stay short and stable
pub const TEST_TEMPERATURE: f64 = 0.1;

/// Response length cap for the probe request
pub const TEST_MAX_TOKENS: u32 = 10;

/// Provider id used when none is given on the command line
pub const DEFAULT_PROVIDER: &str = "zhipuai";

/// Base URL for Zhipu AI's OpenAI-compatible API
pub const ZHIPU_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";

/// Base URL for Alibaba Bailian's OpenAI-compatible API
pub const BAILIAN_BASE_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";

/// Base URL for Volcano Engine's OpenAI-compatible API
pub const VOLCANO_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";

/// Base URL for SiliconFlow's OpenAI-compatible API
pub const SILICONFLOW_BASE_URL: &str = "https://api.siliconflow.cn/v1";
