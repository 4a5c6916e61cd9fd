//! User-facing strings shown by the screens.

pub const CONNECTION_ERROR: &str = "Erro de conexão com a API.";

pub const LOGIN_FAILED: &str = "Falha no login. Verifique suas credenciais.";

pub const REGISTER_FAILED: &str = "Falha no cadastro.";

pub const REGISTER_SUCCESS: &str = "Cadastro realizado com sucesso! Redirecionando para o login...";

pub const SESSION_EXPIRED: &str = "Sessão expirada. Por favor, faça login novamente.";

pub const PIX_FETCH_FAILED: &str = "Erro ao buscar informações do PIX.";

pub const PIX_LOADING: &str = "Carregando informações do PIX...";

pub const COPY_FAILED: &str = "Falha ao copiar o código.";

pub const COPY_LABEL: &str = "Copiar Código PIX";

pub const COPIED_LABEL: &str = "Copiado! ✅";
