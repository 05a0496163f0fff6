use crate::args::FuzzArgs;
use crate::filter::FilterChain;
use crate::http::RequestTemplate;
use crate::input::WordlistInput;

/// A validated run, ready to execute.
#[derive(Debug)]
pub(in crate::entry) struct RunPlan {
    pub(super) args: FuzzArgs,
    pub(super) template: RequestTemplate,
    pub(super) chain: FilterChain,
    pub(super) input: WordlistInput,
}

#[cfg(test)]
impl RunPlan {
    pub(in crate::entry) const fn template(&self) -> &RequestTemplate {
        &self.template
    }

    pub(in crate::entry) const fn chain(&self) -> &FilterChain {
        &self.chain
    }
}
