use generational_arena::Index;

/// One node of the search tree. The arena owns every node; `parent` is a
/// back-reference only. Expansion always takes the first untried action in
/// enumeration order, so the tried actions are the leading `num_tried`
/// entries of `legal_actions`.
#[derive(Debug)]
pub struct MCTSNode<S, A> {
    game_state: S,
    parent: Option<Index>,
    parent_action: Option<A>,
    legal_actions: Vec<A>,
    num_tried: usize,
    children: Vec<Index>,
    cumulative_reward: f32,
    visits: usize,
}

impl<S, A> MCTSNode<S, A> {
    pub fn new(
        game_state: S,
        parent: Option<Index>,
        parent_action: Option<A>,
        legal_actions: Vec<A>,
    ) -> Self {
        Self {
            game_state,
            parent,
            parent_action,
            legal_actions,
            num_tried: 0,
            children: Vec::new(),
            cumulative_reward: 0.0,
            // Creation counts as the node's first visit.
            visits: 1,
        }
    }

    pub fn game_state(&self) -> &S {
        &self.game_state
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn parent_action(&self) -> Option<&A> {
        self.parent_action.as_ref()
    }

    pub fn legal_actions(&self) -> &[A] {
        &self.legal_actions
    }

    pub fn tried_actions(&self) -> &[A] {
        &self.legal_actions[..self.num_tried]
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn cumulative_reward(&self) -> f32 {
        self.cumulative_reward
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn is_fully_explored(&self) -> bool {
        self.num_tried == self.legal_actions.len()
    }

    /// The next action to expand, in enumeration order.
    pub fn next_untried_action(&self) -> Option<&A> {
        self.legal_actions.get(self.num_tried)
    }

    /// Records the untried action just expanded and its new child.
    pub fn push_child(&mut self, child: Index) {
        debug_assert!(self.num_tried < self.legal_actions.len());
        self.num_tried += 1;
        self.children.push(child);
    }

    /// Folds one backpropagated simulation outcome into this node.
    pub fn record_reward(&mut self, reward: f32) {
        self.cumulative_reward += reward;
        self.visits += 1;
    }
}
