// src/services/mod.rs
pub mod aluno_service;
pub mod api_client;
pub mod dashboard_service;
pub mod matricula_service;
pub mod turma_service;
