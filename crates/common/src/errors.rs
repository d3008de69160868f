use domain::DomainError;
use thiserror::Error;

/// Основная иерархия ошибок приложения.
///
/// Ни одна из них не завершает сессию: каждая перехватывается у места
/// действия пользователя и превращается в уведомление (`user_message`).
#[derive(Error, Debug)]
pub enum WardrobeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("AI request failed: {0}")]
    Ai(NetworkError),

    #[error("Weather lookup failed: {0}")]
    Weather(NetworkError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Image error: {0}")]
    Image(String),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

pub type WardrobeResult<T> = Result<T, WardrobeError>;

/// Ошибки конфигурации
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("API key not found: set {var}")]
    MissingCredential { var: &'static str },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to parse config {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Ошибки внешних HTTP вызовов: транспорт, статус, тело ответа
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP error {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Request timeout after {0}s")]
    Timeout(u64),

    #[error("Unparsable response: {0}")]
    InvalidBody(String),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Response violates schema: {0}")]
    SchemaViolation(String),
}

/// Ошибки получения координат. Каждая даёт своё сообщение пользователю.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,

    #[error("Geolocation permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

/// Ошибки локального хранилища
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

impl WardrobeError {
    /// Текст уведомления для пользователя
    pub fn user_message(&self) -> String {
        match self {
            WardrobeError::Config(ConfigError::MissingCredential { var }) => {
                format!("API ключ не найден. Укажите {var} в окружении или в файле .env")
            }
            WardrobeError::Config(e) => format!("Ошибка конфигурации: {e}"),
            WardrobeError::Ai(_) => {
                "Не удалось получить ответ AI. Проверьте API Key и соединение, затем попробуйте еще раз."
                    .to_string()
            }
            WardrobeError::Weather(_) => {
                "Не удалось получить данные о погоде. Проверьте соединение.".to_string()
            }
            WardrobeError::Location(LocationError::Unsupported) => {
                "Геолокация не поддерживается. Укажите координаты в настройках или введите погоду вручную."
                    .to_string()
            }
            WardrobeError::Location(LocationError::PermissionDenied) => {
                "Не удалось определить местоположение. Разрешите доступ к геопозиции.".to_string()
            }
            WardrobeError::Location(LocationError::Unavailable(_)) => {
                "Местоположение сейчас недоступно. Попробуйте позже.".to_string()
            }
            WardrobeError::Storage(_) => "Не удалось сохранить гардероб на диск.".to_string(),
            WardrobeError::Image(_) => {
                "Не удалось прочитать изображение. Выберите другое фото.".to_string()
            }
            WardrobeError::Domain(DomainError::EmptyWardrobe) => {
                "Гардероб пуст. Сначала добавьте вещи.".to_string()
            }
            WardrobeError::Domain(DomainError::InsufficientItems { .. }) => {
                "Недостаточно вещей. Добавьте хотя бы один верх и один низ.".to_string()
            }
            WardrobeError::Domain(DomainError::ItemNotFound(id)) => {
                format!("Вещь {id} не найдена.")
            }
            WardrobeError::Domain(e) => e.to_string(),
        }
    }
}
