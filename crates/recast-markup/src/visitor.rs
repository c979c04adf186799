//! Double dispatch over [`Node`].
//!
//! Every kind has a required method with no default body, so a back end that
//! forgets a kind does not compile.

use crate::ast::{
    ButtonNode, CardNode, ConstraintNode, EditTextNode, ImageNode, IncludeNode, LinearNode, Node,
    RangeSliderNode, ScrollNode, SliderNode, StackNode, TextNode, ToggleNode, ViewNode,
};

pub trait Visitor {
    type Output;

    fn visit_text(&mut self, node: &TextNode) -> Self::Output;
    fn visit_button(&mut self, node: &ButtonNode) -> Self::Output;
    fn visit_edit_text(&mut self, node: &EditTextNode) -> Self::Output;
    fn visit_image(&mut self, node: &ImageNode) -> Self::Output;
    fn visit_check_box(&mut self, node: &ToggleNode) -> Self::Output;
    fn visit_radio_button(&mut self, node: &ToggleNode) -> Self::Output;
    fn visit_switch(&mut self, node: &ToggleNode) -> Self::Output;
    fn visit_range_slider(&mut self, node: &RangeSliderNode) -> Self::Output;
    fn visit_slider(&mut self, node: &SliderNode) -> Self::Output;
    fn visit_view(&mut self, node: &ViewNode) -> Self::Output;
    fn visit_include(&mut self, node: &IncludeNode) -> Self::Output;
    fn visit_row(&mut self, node: &StackNode) -> Self::Output;
    fn visit_column(&mut self, node: &StackNode) -> Self::Output;
    fn visit_box(&mut self, node: &StackNode) -> Self::Output;
    fn visit_linear_layout(&mut self, node: &LinearNode) -> Self::Output;
    fn visit_radio_group(&mut self, node: &LinearNode) -> Self::Output;
    fn visit_card(&mut self, node: &CardNode) -> Self::Output;
    fn visit_scroll_view(&mut self, node: &ScrollNode) -> Self::Output;
    fn visit_constraint_layout(&mut self, node: &ConstraintNode) -> Self::Output;
}

impl Node {
    /// Calls the visitor method for this node's kind.  Children are not
    /// visited; the visitor recurses itself when it wants to.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Text(n) => visitor.visit_text(n),
            Node::Button(n) => visitor.visit_button(n),
            Node::EditText(n) => visitor.visit_edit_text(n),
            Node::Image(n) => visitor.visit_image(n),
            Node::CheckBox(n) => visitor.visit_check_box(n),
            Node::RadioButton(n) => visitor.visit_radio_button(n),
            Node::Switch(n) => visitor.visit_switch(n),
            Node::RangeSlider(n) => visitor.visit_range_slider(n),
            Node::Slider(n) => visitor.visit_slider(n),
            Node::View(n) => visitor.visit_view(n),
            Node::Include(n) => visitor.visit_include(n),
            Node::Row(n) => visitor.visit_row(n),
            Node::Column(n) => visitor.visit_column(n),
            Node::Box(n) => visitor.visit_box(n),
            Node::LinearLayout(n) => visitor.visit_linear_layout(n),
            Node::RadioGroup(n) => visitor.visit_radio_group(n),
            Node::Card(n) => visitor.visit_card(n),
            Node::ScrollView(n) => visitor.visit_scroll_view(n),
            Node::ConstraintLayout(n) => visitor.visit_constraint_layout(n),
        }
    }
}
