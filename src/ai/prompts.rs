use crate::domain::Category;

const FEW_SHOT_EXAMPLES: &str = r#"Exemplos de classificação:

Exemplo 1:
Email: "Prezados, gostaria de solicitar o status da minha solicitação de reembolso enviada no dia 15/03. Aguardo retorno."
Classificação: PRODUTIVO
Confiança: 95
Razão: Solicitação clara que requer ação e resposta específica sobre status de reembolso.

Exemplo 2:
Email: "Oi pessoal! Feliz Ano Novo para todos! Que 2026 seja um ano incrível!"
Classificação: IMPRODUTIVO
Confiança: 98
Razão: Mensagem de felicitação sazonal sem demanda de ação ou resposta.

Exemplo 3:
Email: "Urgente: O sistema está apresentando erro crítico na página de login. Clientes não conseguem acessar. Necessário verificar imediatamente."
Classificação: PRODUTIVO
Confiança: 100
Razão: Problema técnico urgente que demanda ação imediata da equipe.

Exemplo 4:
Email: "Obrigado pela ajuda de ontem! Consegui resolver o problema. Vocês são demais!"
Classificação: IMPRODUTIVO
Confiança: 90
Razão: Agradecimento que não requer resposta ou ação adicional.

Exemplo 5:
Email: "Prezado, preciso atualizar meu endereço de cobrança. Como devo proceder? Anexei os documentos necessários."
Classificação: PRODUTIVO
Confiança: 95
Razão: Solicitação de atualização cadastral que requer processamento e resposta."#;

const PRODUCTIVE_GUIDANCE: &str = "Para emails PRODUTIVOS:
- Reconheça a solicitação do remetente
- Indique os próximos passos ou prazo de resolução
- Seja específico e objetivo
- Mantenha tom profissional mas acessível
- Ofereça canal adicional de contato se necessário";

const UNPRODUCTIVE_GUIDANCE: &str = "Para emails IMPRODUTIVOS:
- Responda de forma educada e cordial
- Seja breve e direto
- Reconheça a mensagem sem criar expectativas de ação
- Mantenha tom leve e amigável";

pub fn classification_prompt(email: &str) -> String {
    format!(
        r#"Você é um assistente especializado em classificar emails corporativos.

{FEW_SHOT_EXAMPLES}

Agora classifique o email abaixo seguindo o mesmo padrão dos exemplos:

Classifique o email em uma das categorias:
- PRODUTIVO: Requer ação, resposta ou acompanhamento (reunião, prazo, rh, orçamento, suporte técnico, atualização de dados, etc)
- IMPRODUTIVO: Não requer ação imediata (saudações, agradecimentos, felicitações, cupons, spam, etc)

Email:
{email}

Responda APENAS no formato JSON:
{{
  "categoria": "PRODUTIVO" ou "IMPRODUTIVO",
  "confianca": 0-100,
  "razao": "breve explicação baseada no contexto"
}}
"#
    )
}

pub fn reply_prompt(email: &str, category: Category) -> String {
    let guidance = match category {
        Category::Produtivo => PRODUCTIVE_GUIDANCE,
        Category::Improdutivo => UNPRODUCTIVE_GUIDANCE,
    };

    format!(
        "Gere uma resposta automática profissional e cordial para o email classificado como {category}.

{guidance}

Email original:
{email}

A resposta deve:
- Ter 2-3 parágrafos curtos
- Ser clara e objetiva
- Usar tom profissional mas amigável
- Não incluir assinatura (será adicionada automaticamente)

Gere apenas a resposta, sem explicações adicionais.
"
    )
}

/// Appends the ranked keywords so the model sees the salient terms.
pub fn with_keywords(email: &str, keywords: &[String]) -> String {
    format!(
        "{email}\n\n[Palavras-chave identificadas: {}]",
        keywords.join(", ")
    )
}
